// Core generation and pipeline exports
pub mod engine;
pub mod pipeline;
pub mod prompts;
pub mod zodiac;

pub use engine::{AiEngine, EngineError, CONSISTENCY_PASS_THRESHOLD};
pub use pipeline::{chat_unlocked, qualify_matches, CHAT_UNLOCK_THRESHOLD};
pub use zodiac::zodiac_sign;
