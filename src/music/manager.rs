use tracing::debug;

use crate::database::Database;
use crate::error::Error;

use super::{is_well_formed_music_id, MusicValidation};

#[tracing::instrument(skip(db))]
pub async fn validate_music_by_id(
    db: &dyn Database,
    music_id: &str,
) -> Result<MusicValidation, Error> {
    let validation = match db.music().fetch_music_by_id(music_id).await? {
        Some(music) if music.can_be_used_in_ads() => MusicValidation::Eligible(music),
        Some(music) => MusicValidation::Ineligible(music),
        None if !is_well_formed_music_id(music_id) => {
            debug!("music id is malformed");
            MusicValidation::MalformedId
        }
        None => MusicValidation::NotFound,
    };

    Ok(validation)
}
