use serde::{Deserialize, Serialize};

use crate::models::domain::{ConsistencyResult, DatingTip, QualifiedMatch, UserProfile};

/// Success body of the Model Gateway endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
}

/// Error body of the Model Gateway endpoint
///
/// Kept as a bare `{ "error": ... }` object; browser clients of the original
/// relay depend on this exact shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayError {
    pub error: String,
}

/// Error response for the versioned API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Response to a profile submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitProfileResponse {
    pub profile: UserProfile,
    pub consistency: ConsistencyResult,
}

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub matches: Vec<QualifiedMatch>,
    pub total_candidates: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcebreakerResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioResponse {
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsResponse {
    pub tips: Vec<DatingTip>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProfileResponse {
    pub success: bool,
}
