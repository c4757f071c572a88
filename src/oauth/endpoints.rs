use actix_web::post;
use actix_web::web::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::TokenBundle;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ExchangeTokenBody {
    #[serde(default)]
    pub code: Option<String>,
}

#[post("/oauth/token")]
#[tracing::instrument]
pub async fn exchange_token(body: Option<Json<ExchangeTokenBody>>) -> Json<TokenBundle> {
    let has_code = body.map_or(false, |body| body.code.is_some());
    info!(has_code, "minting mock token");

    Json(TokenBundle::mint(Utc::now()))
}
