use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::MatchProfile;

/// Body of the Model Gateway endpoint
///
/// `prompt` defaults to empty so a missing field reaches the handler and gets
/// the gateway's own 400 body instead of a generic deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, rename = "jsonMode", alias = "json_mode")]
    pub json_mode: bool,
}

/// Request to find qualified matches for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default = "default_candidate_count")]
    #[serde(alias = "candidate_count", rename = "candidateCount")]
    pub candidate_count: u8,
}

fn default_candidate_count() -> u8 {
    6
}

/// Request for an icebreaker opener toward one match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IcebreakerRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(rename = "match")]
    pub match_profile: MatchProfile,
    #[serde(alias = "compatibility_score", rename = "compatibilityScore")]
    pub compatibility_score: f64,
}

/// Request scoped to a stored profile (horoscope, tips, insight)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

/// Request for a synastry reading between two birth dates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynastryRequest {
    #[serde(alias = "user_birth_date", rename = "userBirthDate")]
    pub user_birth_date: NaiveDate,
    #[serde(alias = "match_birth_date", rename = "matchBirthDate")]
    pub match_birth_date: NaiveDate,
}
