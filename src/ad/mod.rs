use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod db;
pub mod endpoints;
pub mod manager;
pub mod validation;
pub use endpoints::*;

pub const ADVERTISER_ID: &str = "adv_789012345";
pub const USER_ID: u64 = 1;
pub const REVIEW_ESTIMATE: &str = "24-48 hours";

const AD_ID_SUFFIX_LEN: usize = 8;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Ad {
    pub id: u64,
    pub ad_id: String,
    pub creative_id: String,
    pub campaign_name: String,
    pub objective: Objective,
    pub ad_text: String,
    pub cta: String,
    pub music_option: MusicOption,
    pub music_id: String,
    pub status: AdStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_review_time: String,
    pub advertiser_id: String,
    pub user_id: u64,
}

impl Ad {
    /// Matches either the generated `ad_id` or the sequential `id`.
    pub fn is_identified_by(&self, id: &str) -> bool {
        self.ad_id == id || self.id.to_string() == id
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Traffic,
    Conversions,
}

impl FromStr for Objective {
    type Err = ();

    fn from_str(s: &str) -> Result<Objective, ()> {
        match s.to_lowercase().as_str() {
            "traffic" => Ok(Objective::Traffic),
            "conversions" => Ok(Objective::Conversions),
            _ => Err(()),
        }
    }
}

/// How the ad gets its soundtrack. Only the exact lowercase names are
/// recognized; anything else is stored as given.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum MusicOption {
    None,
    Existing,
    Custom,
    Other(String),
}

impl Default for MusicOption {
    fn default() -> MusicOption {
        MusicOption::None
    }
}

impl From<String> for MusicOption {
    fn from(option: String) -> MusicOption {
        match option.as_str() {
            "none" => MusicOption::None,
            "existing" => MusicOption::Existing,
            "custom" => MusicOption::Custom,
            _ => MusicOption::Other(option),
        }
    }
}

impl From<MusicOption> for String {
    fn from(option: MusicOption) -> String {
        match option {
            MusicOption::None => "none".to_string(),
            MusicOption::Existing => "existing".to_string(),
            MusicOption::Custom => "custom".to_string(),
            MusicOption::Other(option) => option,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdStatus {
    UnderReview,
}

/// The generated identifier pair of a new ad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdIds {
    pub ad_id: String,
    pub creative_id: String,
}

impl AdIds {
    pub fn generate<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> AdIds {
        let suffix: String = (0..AD_ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();

        let ad_id = format!("ad_{}_{}", now.timestamp_millis(), suffix);
        let creative_id = format!("creative_{}", ad_id);

        AdIds { ad_id, creative_id }
    }
}
