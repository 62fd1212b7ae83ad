use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User profile collected by the onboarding wizard
///
/// Free-text answers are embedded verbatim into generation prompts, so the
/// struct keeps them as plain strings rather than normalizing them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub values: Vec<String>,
    pub interests: Vec<String>,
    pub lifestyle: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looking_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub love_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_breaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proudest_achievement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfect_day: Option<String>,
    pub opt_in_astrology: bool,
    pub opt_in_salary: bool,
    /// Stamped by the consistency analysis on profile submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticity_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency_flags: Option<Vec<String>>,
}

/// A candidate profile, as generated by the model or stored for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// Per-candidate compatibility verdict from the scoring task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub match_id: String,
    /// 0.0 to 1.0
    pub score: f64,
    pub explanation: String,
    pub key_factors: Vec<String>,
}

/// Outcome of the profile-consistency analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyResult {
    /// 0 to 100
    pub score: f64,
    pub flags: Vec<String>,
    pub passed: bool,
}

/// Daily horoscope for one sun sign
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeReading {
    pub date: NaiveDate,
    pub sign: String,
    pub reading: String,
}

/// Astrological pairing read between two birth dates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynastryReading {
    pub user_sign: String,
    pub match_sign: String,
    /// Excellent / Good / Moderate / Challenging
    pub compatibility: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TipCategory {
    Conversation,
    FirstDate,
    Relationship,
    SelfGrowth,
}

/// One personalized dating tip
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatingTip {
    pub id: String,
    pub category: TipCategory,
    pub title: String,
    pub content: String,
    pub emoji: String,
}

/// Relationship-style summary generated from the full profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipInsight {
    pub title: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub weekly_challenge: String,
}

/// A candidate that cleared the chat-unlock threshold, joined to its verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifiedMatch {
    #[serde(rename = "match")]
    pub profile: MatchProfile,
    pub compatibility: CompatibilityResult,
    pub chat_unlocked: bool,
}
