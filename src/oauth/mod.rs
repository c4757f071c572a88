use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod endpoints;
pub use endpoints::*;

pub const OPEN_ID: &str = "open_id_123456789";
pub const SCOPE: &str = "user.info.basic,ads.identity";
pub const TOKEN_TYPE: &str = "Bearer";
pub const EXPIRES_IN_SECONDS: u64 = 3600;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub open_id: String,
    pub scope: String,
    pub token_type: String,
}

impl TokenBundle {
    /// Mints a fresh bearer token. Any authorization code is accepted.
    pub fn mint(now: DateTime<Utc>) -> TokenBundle {
        let millis = now.timestamp_millis();

        TokenBundle {
            access_token: format!("mock_token_{}", millis),
            refresh_token: format!("mock_refresh_{}", millis),
            expires_in: EXPIRES_IN_SECONDS,
            open_id: OPEN_ID.to_string(),
            scope: SCOPE.to_string(),
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}
