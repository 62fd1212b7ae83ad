use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use crate::core::prompts;
use crate::core::zodiac::zodiac_sign;
use crate::models::{
    CompatibilityResult, ConsistencyResult, DatingTip, HoroscopeReading, MatchProfile,
    RelationshipInsight, SynastryReading, UserProfile,
};
use crate::services::{GenerationRequest, GenerationTransport, TransportError};

/// Consistency scores at or above this value mark the profile as passed.
pub const CONSISTENCY_PASS_THRESHOLD: f64 = 70.0;

/// Errors raised by the generation engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The model's reply was not the JSON shape the task asked for.
    /// Always surfaced, never replaced with a default result.
    #[error("Malformed {task} response: {source}")]
    MalformedResponse {
        task: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// The single entry point for every generation task
///
/// Each task renders its prompt, runs it through the configured transport in
/// JSON mode, strips code fences, and decodes into the task's typed result.
pub struct AiEngine {
    transport: Arc<dyn GenerationTransport>,
    default_deployment: String,
    scoring_deployment: String,
}

#[derive(Debug, Deserialize)]
struct CompatibilityEnvelope {
    results: Vec<CompatibilityResult>,
}

#[derive(Debug, Deserialize)]
struct ReadingWire {
    reading: String,
}

#[derive(Debug, Deserialize)]
struct SynastryWire {
    compatibility: String,
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct MessageWire {
    message: String,
}

#[derive(Debug, Deserialize)]
struct BioWire {
    bio: String,
}

#[derive(Debug, Deserialize)]
struct ConsistencyWire {
    score: f64,
    #[serde(default)]
    flags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MatchesWire {
    matches: Vec<MatchProfile>,
}

#[derive(Debug, Deserialize)]
struct TipsWire {
    tips: Vec<DatingTip>,
}

impl AiEngine {
    pub fn new(
        transport: Arc<dyn GenerationTransport>,
        default_deployment: String,
        scoring_deployment: String,
    ) -> Self {
        Self {
            transport,
            default_deployment,
            scoring_deployment,
        }
    }

    /// One JSON-mode call: prompt in, decoded value out.
    async fn call_json<T: DeserializeOwned>(
        &self,
        task: &'static str,
        prompt: String,
        deployment: &str,
    ) -> Result<T, EngineError> {
        let request = GenerationRequest::json(prompt, Some(deployment.to_string()));
        let content = self.transport.generate(&request).await?;
        let text = strip_json_fences(&content);

        tracing::debug!("Decoding {} response ({} bytes)", task, text.len());

        serde_json::from_str(text).map_err(|source| EngineError::MalformedResponse { task, source })
    }

    /// Score the user against each candidate, one verdict per candidate
    pub async fn score_compatibility(
        &self,
        user: &UserProfile,
        candidates: &[MatchProfile],
    ) -> Result<Vec<CompatibilityResult>, EngineError> {
        let prompt = prompts::compatibility_prompt(user, candidates);
        let envelope: CompatibilityEnvelope = self
            .call_json("compatibility", prompt, &self.scoring_deployment)
            .await?;
        Ok(envelope.results)
    }

    pub async fn daily_horoscope(
        &self,
        birth_date: NaiveDate,
    ) -> Result<HoroscopeReading, EngineError> {
        let sign = zodiac_sign(birth_date);
        let prompt = prompts::daily_horoscope_prompt(birth_date, sign);
        let wire: ReadingWire = self
            .call_json("horoscope", prompt, &self.default_deployment)
            .await?;

        Ok(HoroscopeReading {
            date: Utc::now().date_naive(),
            sign: sign.to_string(),
            reading: wire.reading,
        })
    }

    pub async fn synastry(
        &self,
        user_birth_date: NaiveDate,
        match_birth_date: NaiveDate,
    ) -> Result<SynastryReading, EngineError> {
        let user_sign = zodiac_sign(user_birth_date);
        let match_sign = zodiac_sign(match_birth_date);
        let prompt =
            prompts::synastry_prompt(user_sign, user_birth_date, match_sign, match_birth_date);
        let wire: SynastryWire = self
            .call_json("synastry", prompt, &self.default_deployment)
            .await?;

        Ok(SynastryReading {
            user_sign: user_sign.to_string(),
            match_sign: match_sign.to_string(),
            compatibility: wire.compatibility,
            explanation: wire.explanation,
        })
    }

    pub async fn icebreaker(
        &self,
        user: &UserProfile,
        candidate: &MatchProfile,
    ) -> Result<String, EngineError> {
        let prompt = prompts::icebreaker_prompt(user, candidate);
        let wire: MessageWire = self
            .call_json("icebreaker", prompt, &self.default_deployment)
            .await?;
        Ok(wire.message)
    }

    pub async fn generate_bio(&self, user: &UserProfile) -> Result<String, EngineError> {
        let prompt = prompts::bio_prompt(user);
        let wire: BioWire = self.call_json("bio", prompt, &self.default_deployment).await?;
        Ok(wire.bio)
    }

    /// Judge the profile for internal contradictions.
    ///
    /// A decode failure propagates as `MalformedResponse`; it is never
    /// collapsed into a passing result.
    pub async fn analyze_consistency(
        &self,
        user: &UserProfile,
    ) -> Result<ConsistencyResult, EngineError> {
        let prompt = prompts::consistency_prompt(user);
        let wire: ConsistencyWire = self
            .call_json("consistency", prompt, &self.default_deployment)
            .await?;

        Ok(ConsistencyResult {
            score: wire.score,
            passed: wire.score >= CONSISTENCY_PASS_THRESHOLD,
            flags: wire.flags,
        })
    }

    /// Generate a candidate pool for the user.
    ///
    /// Candidates the model returns without an id get a UUID backfilled so
    /// the downstream join by id stays total.
    pub async fn generate_candidates(
        &self,
        user: &UserProfile,
        count: u8,
    ) -> Result<Vec<MatchProfile>, EngineError> {
        let prompt = prompts::match_profiles_prompt(user, count);
        let wire: MatchesWire = self
            .call_json("match generation", prompt, &self.default_deployment)
            .await?;

        let mut candidates = wire.matches;
        for candidate in &mut candidates {
            if candidate.id.is_empty() {
                candidate.id = uuid::Uuid::new_v4().to_string();
            }
        }
        Ok(candidates)
    }

    pub async fn dating_tips(&self, user: &UserProfile) -> Result<Vec<DatingTip>, EngineError> {
        let prompt = prompts::dating_tips_prompt(user);
        let wire: TipsWire = self
            .call_json("tips", prompt, &self.default_deployment)
            .await?;
        Ok(wire.tips)
    }

    pub async fn relationship_insight(
        &self,
        user: &UserProfile,
    ) -> Result<RelationshipInsight, EngineError> {
        let prompt = prompts::relationship_insight_prompt(user);
        self.call_json("insight", prompt, &self.default_deployment)
            .await
    }
}

/// Strips ```json ... ``` or ``` ... ``` fences some models wrap JSON in.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else {
        text
    }
}
