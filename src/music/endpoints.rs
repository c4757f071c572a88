use actix_web::get;
use actix_web::web::{Data, Json, Path};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, Music, MusicValidation};

/// Every outcome is answered with `200 OK`; `success` tells whether the
/// track was found and `valid` whether it may be used in ads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MusicValidationBody {
    pub valid: bool,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<Music>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_accessible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_be_used_in_ads: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MusicValidationBody {
    pub fn render(validation: MusicValidation) -> MusicValidationBody {
        match validation {
            MusicValidation::Eligible(music) => MusicValidationBody::found(music, None),
            MusicValidation::Ineligible(music) => MusicValidationBody::found(
                music,
                Some("This music track is not approved for ads"),
            ),
            MusicValidation::NotFound => MusicValidationBody::failed("Music ID not found"),
            MusicValidation::MalformedId => MusicValidationBody::failed("Music ID format is invalid"),
        }
    }

    fn found(music: Music, error: Option<&str>) -> MusicValidationBody {
        MusicValidationBody {
            valid: music.can_be_used_in_ads(),
            success: true,
            is_accessible: Some(true),
            can_be_used_in_ads: Some(music.can_be_used_in_ads()),
            music: Some(music),
            error: error.map(str::to_string),
        }
    }

    fn failed(error: &str) -> MusicValidationBody {
        MusicValidationBody {
            valid: false,
            success: false,
            music: None,
            is_accessible: None,
            can_be_used_in_ads: None,
            error: Some(error.to_string()),
        }
    }
}

#[get("/music/validate/{music_id}")]
#[tracing::instrument(skip(db))]
pub async fn validate_music_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<MusicValidationBody>, Error> {
    let music_id = params.into_inner();
    let validation = manager::validate_music_by_id(&***db, &music_id).await?;

    Ok(Json(MusicValidationBody::render(validation)))
}
