// Integration tests for Amora AI
//
// Drives the generation engine end-to-end over a canned in-process transport,
// the same seam the bridge and HTTP transports plug into.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use amora_ai::core::engine::{AiEngine, EngineError};
use amora_ai::core::pipeline::qualify_matches;
use amora_ai::models::{MatchProfile, TipCategory, UserProfile};
use amora_ai::services::transport::{GenerationRequest, GenerationTransport, TransportError};

/// Transport that replays canned responses and records every request
struct CannedTransport {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl CannedTransport {
    fn new(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn recorded(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationTransport for CannedTransport {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned response left"))
    }
}

fn engine(transport: Arc<CannedTransport>) -> AiEngine {
    AiEngine::new(transport, "gpt-4o-mini".to_string(), "gpt-4o".to_string())
}

fn user() -> UserProfile {
    UserProfile {
        name: "Ana".to_string(),
        interests: vec!["hiking".to_string(), "jazz".to_string()],
        values: vec!["honesty".to_string()],
        opt_in_astrology: true,
        birth_date: NaiveDate::from_ymd_opt(1995, 8, 5),
        ..Default::default()
    }
}

fn candidate(id: &str, name: &str) -> MatchProfile {
    MatchProfile {
        id: id.to_string(),
        image_url: None,
        profile: UserProfile {
            name: name.to_string(),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn test_bio_happy_path() {
    let transport = CannedTransport::new(&[r#"{"bio":"Loves hiking."}"#]);
    let engine = engine(transport.clone());

    let bio = engine.generate_bio(&user()).await.unwrap();
    assert_eq!(bio, "Loves hiking.");

    let requests = transport.recorded();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].json_mode, "all tasks run in JSON mode");
    assert!(requests[0].prompt.contains("Return ONLY valid JSON"));
}

#[tokio::test]
async fn test_compatibility_round_trip_preserves_types_and_order() {
    let transport = CannedTransport::new(&[r#"{
        "results": [
            {"matchId": "m1", "score": 0.92, "explanation": "Great fit.", "keyFactors": ["values", "schedule"]},
            {"matchId": "m2", "score": 0.55, "explanation": "Weak fit.", "keyFactors": ["languages"]}
        ]
    }"#]);
    let engine = engine(transport.clone());

    let results = engine
        .score_compatibility(&user(), &[candidate("m1", "Bea"), candidate("m2", "Cara")])
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].score, 0.92);
    assert_eq!(results[0].key_factors, vec!["values", "schedule"]);
    assert_eq!(results[1].match_id, "m2");

    // scoring goes to the scoring deployment
    let requests = transport.recorded();
    assert_eq!(requests[0].model.as_deref(), Some("gpt-4o"));
}

#[tokio::test]
async fn test_matches_flow_end_to_end() {
    let transport = CannedTransport::new(&[r#"{
        "results": [
            {"matchId": "m1", "score": 0.92, "explanation": "Great fit.", "keyFactors": ["values"]},
            {"matchId": "m2", "score": 0.70, "explanation": "Borderline fit.", "keyFactors": ["interests"]},
            {"matchId": "m3", "score": 0.6999, "explanation": "Just under.", "keyFactors": ["style"]},
            {"matchId": "ghost", "score": 0.95, "explanation": "No such candidate.", "keyFactors": []}
        ]
    }"#]);
    let engine = engine(transport);

    let candidates = vec![
        candidate("m1", "Bea"),
        candidate("m2", "Cara"),
        candidate("m3", "Dana"),
    ];
    let results = engine.score_compatibility(&user(), &candidates).await.unwrap();
    let qualified = qualify_matches(results, &candidates);

    // 0.70 retained, 0.6999 excluded, orphan dropped, descending order
    assert_eq!(qualified.len(), 2);
    assert_eq!(qualified[0].profile.id, "m1");
    assert_eq!(qualified[1].profile.id, "m2");
    assert_eq!(qualified[1].compatibility.score, 0.70);
}

#[tokio::test]
async fn test_horoscope_uses_computed_sign() {
    let transport = CannedTransport::new(&[r#"{"reading":"A good day to reach out."}"#]);
    let engine = engine(transport.clone());

    let birth = NaiveDate::from_ymd_opt(1995, 8, 5).unwrap();
    let reading = engine.daily_horoscope(birth).await.unwrap();

    assert_eq!(reading.sign, "Leo");
    assert_eq!(reading.reading, "A good day to reach out.");

    let requests = transport.recorded();
    assert!(requests[0].prompt.contains("(Leo)"));
}

#[tokio::test]
async fn test_synastry_reading() {
    let transport =
        CannedTransport::new(&[r#"{"compatibility":"Good","explanation":"Complementary signs."}"#]);
    let engine = engine(transport);

    let reading = engine
        .synastry(
            NaiveDate::from_ymd_opt(1995, 8, 5).unwrap(),
            NaiveDate::from_ymd_opt(1993, 1, 25).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(reading.user_sign, "Leo");
    assert_eq!(reading.match_sign, "Aquarius");
    assert_eq!(reading.compatibility, "Good");
}

#[tokio::test]
async fn test_consistency_passes_at_threshold() {
    let transport = CannedTransport::new(&[r#"{"score": 70, "flags": []}"#]);
    let engine = engine(transport);

    let result = engine.analyze_consistency(&user()).await.unwrap();
    assert_eq!(result.score, 70.0);
    assert!(result.passed);
    assert!(result.flags.is_empty());
}

#[tokio::test]
async fn test_consistency_fails_below_threshold_with_flags() {
    let transport = CannedTransport::new(
        &[r#"{"score": 40, "flags": ["Claims to love the outdoors but lists no outdoor interests"]}"#],
    );
    let engine = engine(transport);

    let result = engine.analyze_consistency(&user()).await.unwrap();
    assert!(!result.passed);
    assert_eq!(result.flags.len(), 1);
}

#[tokio::test]
async fn test_consistency_malformed_response_propagates() {
    // Pins the policy: a decode failure is an error, never a passing result.
    let transport = CannedTransport::new(&["I could not produce JSON, sorry!"]);
    let engine = engine(transport);

    let err = engine.analyze_consistency(&user()).await.unwrap_err();
    match err {
        EngineError::MalformedResponse { task, .. } => assert_eq!(task, "consistency"),
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fenced_json_is_accepted() {
    let transport =
        CannedTransport::new(&["```json\n{\"message\":\"Hey, fellow hiker!\"}\n```"]);
    let engine = engine(transport);

    let message = engine
        .icebreaker(&user(), &candidate("m1", "Bea"))
        .await
        .unwrap();
    assert_eq!(message, "Hey, fellow hiker!");
}

#[tokio::test]
async fn test_candidate_generation_backfills_ids() {
    let transport = CannedTransport::new(&[r#"{
        "matches": [
            {"id": "m1", "name": "Bea", "values": [], "interests": [], "lifestyle": [], "languages": []},
            {"name": "Cara", "values": [], "interests": [], "lifestyle": [], "languages": []}
        ]
    }"#]);
    let engine = engine(transport);

    let candidates = engine.generate_candidates(&user(), 2).await.unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].id, "m1");
    assert!(!candidates[1].id.is_empty(), "missing id gets backfilled");
}

#[tokio::test]
async fn test_dating_tips_decode_categories() {
    let transport = CannedTransport::new(&[r#"{
        "tips": [
            {"id": "t1", "category": "conversation", "title": "Ask about the trail", "content": "Open with their last hike.", "emoji": "⛰️"},
            {"id": "t2", "category": "selfGrowth", "title": "Keep a log", "content": "Note what felt natural.", "emoji": "📓"}
        ]
    }"#]);
    let engine = engine(transport);

    let tips = engine.dating_tips(&user()).await.unwrap();
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0].category, TipCategory::Conversation);
    assert_eq!(tips[1].category, TipCategory::SelfGrowth);
}

#[tokio::test]
async fn test_relationship_insight_decodes_camel_case_fields() {
    let transport = CannedTransport::new(&[r#"{
        "title": "The Loyal Explorer",
        "description": "Values depth over breadth.",
        "strengths": ["listening", "consistency"],
        "growthAreas": ["opening up sooner"],
        "weeklyChallenge": "Suggest the first date idea yourself."
    }"#]);
    let engine = engine(transport);

    let insight = engine.relationship_insight(&user()).await.unwrap();
    assert_eq!(insight.title, "The Loyal Explorer");
    assert_eq!(insight.growth_areas, vec!["opening up sooner"]);
}
