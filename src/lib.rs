//! Amora AI - LLM generation service for the Amora dating app
//!
//! Everything "intelligent" in Amora (compatibility scoring, horoscopes,
//! synastry, icebreakers, bios, consistency analysis, candidate generation)
//! is one prompt to a hosted model. This crate hosts the Model Gateway that
//! relays those prompts, the transport-agnostic generation engine that types
//! their JSON answers, and the compatibility pipeline that ranks the results.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{qualify_matches, AiEngine, EngineError, CHAT_UNLOCK_THRESHOLD};
pub use crate::models::{CompatibilityResult, MatchProfile, QualifiedMatch, UserProfile};
pub use crate::services::{GenerationRequest, GenerationTransport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert!(CHAT_UNLOCK_THRESHOLD > 0.0 && CHAT_UNLOCK_THRESHOLD < 1.0);
        let qualified = qualify_matches(vec![], &[]);
        assert!(qualified.is_empty());
    }
}
