use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::lenient;

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

const MIN_MUSIC_ID_LEN: usize = 5;

/// A catalog track. The catalog is edited by hand, so every field besides
/// `id` is optional and values of an unexpected shape read as missing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Music {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<MusicStatus>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub is_available_for_ads: Option<bool>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Music {
    pub fn can_be_used_in_ads(&self) -> bool {
        self.is_available_for_ads == Some(true)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum MusicStatus {
    Approved,
    PendingReview,
    Rejected,
    Other(String),
}

impl From<String> for MusicStatus {
    fn from(status: String) -> MusicStatus {
        match status.as_str() {
            "APPROVED" => MusicStatus::Approved,
            "PENDING_REVIEW" => MusicStatus::PendingReview,
            "REJECTED" => MusicStatus::Rejected,
            _ => MusicStatus::Other(status),
        }
    }
}

impl From<MusicStatus> for String {
    fn from(status: MusicStatus) -> String {
        match status {
            MusicStatus::Approved => "APPROVED".to_string(),
            MusicStatus::PendingReview => "PENDING_REVIEW".to_string(),
            MusicStatus::Rejected => "REJECTED".to_string(),
            MusicStatus::Other(status) => status,
        }
    }
}

/// The outcome of checking whether a track may be used in an ad.
#[derive(Clone, Debug, PartialEq)]
pub enum MusicValidation {
    Eligible(Music),
    Ineligible(Music),
    NotFound,
    MalformedId,
}

/// Music ids are at least five characters of letters, digits, `_` or `-`.
pub fn is_well_formed_music_id(music_id: &str) -> bool {
    music_id.len() >= MIN_MUSIC_ID_LEN
        && music_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
