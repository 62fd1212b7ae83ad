// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CompatibilityResult, ConsistencyResult, DatingTip, HoroscopeReading, MatchProfile,
    QualifiedMatch, RelationshipInsight, SynastryReading, TipCategory, UserProfile,
};
pub use requests::{
    ChatRequest, FindMatchesRequest, IcebreakerRequest, ProfileRequest, SynastryRequest,
};
pub use responses::{
    BioResponse, ChatResponse, DeleteProfileResponse, ErrorResponse, FindMatchesResponse,
    GatewayError, HealthResponse, IcebreakerResponse, SubmitProfileResponse, TipsResponse,
};
