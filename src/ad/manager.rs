use chrono::Utc;
use tracing::info;

use crate::database::Database;
use crate::error::Error;

use super::validation::{self, AdDraft};
use super::{Ad, AdIds, AdStatus, CreateAdBody, ADVERTISER_ID, REVIEW_ESTIMATE, USER_ID};

#[tracing::instrument(skip(db))]
pub async fn create_ad(db: &dyn Database, body: &CreateAdBody) -> Result<Ad, Error> {
    let draft = validation::validate_ad(body)
        .map_err(|errors| Error::AdFailedValidation { errors })?;

    let ad = db.ads().insert_ad(new_ad(draft)).await?;
    info!(ad_id = %ad.ad_id, id = ad.id, "created ad");

    Ok(ad)
}

#[tracing::instrument(skip(db))]
pub async fn get_ad_by_id(db: &dyn Database, ad_id: &str) -> Result<Ad, Error> {
    let ad = db
        .ads()
        .fetch_ad_by_id(ad_id)
        .await?
        .ok_or_else(|| Error::AdDoesNotExist {
            ad_id: ad_id.to_string(),
        })?;

    Ok(ad)
}

fn new_ad(draft: AdDraft) -> Ad {
    let now = Utc::now();
    let ids = AdIds::generate(now, &mut rand::thread_rng());

    Ad {
        id: 0,
        ad_id: ids.ad_id,
        creative_id: ids.creative_id,
        campaign_name: draft.campaign_name,
        objective: draft.objective,
        ad_text: draft.ad_text,
        cta: draft.cta,
        music_option: draft.music_option,
        music_id: draft.music_id,
        status: AdStatus::UnderReview,
        created_at: now,
        estimated_review_time: REVIEW_ESTIMATE.to_string(),
        advertiser_id: ADVERTISER_ID.to_string(),
        user_id: USER_ID,
    }
}
