use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;
use crate::utils::{lenient, SuccessBody};

use super::{manager, Ad, AdStatus};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdBody {
    #[serde(default, deserialize_with = "lenient")]
    pub campaign_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub objective: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ad_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub music_option: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub music_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreativeBody {
    pub creative_id: String,
    pub ad_id: String,
    pub status: AdStatus,
    pub review_estimate: String,
    pub created_at: DateTime<Utc>,
}

impl CreativeBody {
    pub fn render(ad: Ad) -> CreativeBody {
        CreativeBody {
            creative_id: ad.creative_id,
            ad_id: ad.ad_id,
            status: ad.status,
            review_estimate: ad.estimated_review_time,
            created_at: ad.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreativeData {
    pub creative: CreativeBody,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdData {
    pub ad: Ad,
}

/// A missing or unreadable body is validated as an empty one, so clients
/// always get the list of failed rules.
#[post("/ads")]
#[tracing::instrument(skip(db))]
pub async fn create_ad(
    db: Data<Box<dyn Database>>,
    body: Option<Json<CreateAdBody>>,
) -> Result<Json<SuccessBody<CreativeData>>, Error> {
    let body = body.map(Json::into_inner).unwrap_or_default();
    let ad = manager::create_ad(&***db, &body).await?;

    let body = SuccessBody::data(CreativeData {
        creative: CreativeBody::render(ad),
    })
    .with_message("Ad created successfully");

    Ok(Json(body))
}

#[get("/ads/{ad_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_ad_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<SuccessBody<AdData>>, Error> {
    let ad_id = params.into_inner();
    let ad = manager::get_ad_by_id(&***db, &ad_id).await?;

    Ok(Json(SuccessBody::data(AdData { ad })))
}
