// Unit tests for Amora AI

use amora_ai::core::pipeline::{chat_unlocked, qualify_matches, CHAT_UNLOCK_THRESHOLD};
use amora_ai::core::prompts;
use amora_ai::core::zodiac::zodiac_sign;
use amora_ai::models::{CompatibilityResult, MatchProfile, UserProfile};
use chrono::NaiveDate;

fn create_result(id: &str, score: f64) -> CompatibilityResult {
    CompatibilityResult {
        match_id: id.to_string(),
        score,
        explanation: "Shared interests and aligned values".to_string(),
        key_factors: vec!["hiking".to_string(), "honesty".to_string()],
    }
}

fn create_candidate(id: &str, name: &str) -> MatchProfile {
    MatchProfile {
        id: id.to_string(),
        image_url: None,
        profile: UserProfile {
            name: name.to_string(),
            interests: vec!["hiking".to_string()],
            ..Default::default()
        },
    }
}

#[test]
fn test_threshold_is_seventy_percent() {
    assert_eq!(CHAT_UNLOCK_THRESHOLD, 0.70);
}

#[test]
fn test_chat_unlock_boundary() {
    assert!(chat_unlocked(0.70));
    assert!(chat_unlocked(0.71));
    assert!(!chat_unlocked(0.6999));
}

#[test]
fn test_qualify_excludes_below_threshold() {
    let candidates = vec![
        create_candidate("a", "Ana"),
        create_candidate("b", "Bea"),
        create_candidate("c", "Cara"),
    ];
    let results = vec![
        create_result("a", 0.92),
        create_result("b", 0.45),
        create_result("c", 0.70),
    ];

    let qualified = qualify_matches(results, &candidates);

    assert_eq!(qualified.len(), 2);
    assert!(qualified.iter().all(|q| q.compatibility.score >= 0.70));
    assert!(!qualified.iter().any(|q| q.profile.id == "b"));
}

#[test]
fn test_qualify_sorts_descending_with_stable_ties() {
    let candidates = vec![
        create_candidate("low", "Ana"),
        create_candidate("tie1", "Bea"),
        create_candidate("tie2", "Cara"),
        create_candidate("high", "Dana"),
    ];
    let results = vec![
        create_result("low", 0.71),
        create_result("tie1", 0.85),
        create_result("tie2", 0.85),
        create_result("high", 0.99),
    ];

    let qualified = qualify_matches(results, &candidates);

    let ids: Vec<&str> = qualified.iter().map(|q| q.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["high", "tie1", "tie2", "low"]);
    for pair in qualified.windows(2) {
        assert!(pair[0].compatibility.score >= pair[1].compatibility.score);
    }
}

#[test]
fn test_qualify_drops_orphan_verdicts() {
    let candidates = vec![create_candidate("real", "Ana")];
    let results = vec![create_result("real", 0.8), create_result("missing", 0.95)];

    let qualified = qualify_matches(results, &candidates);

    assert_eq!(qualified.len(), 1);
    assert_eq!(qualified[0].profile.id, "real");
}

#[test]
fn test_qualified_matches_carry_unlocked_flag() {
    let candidates = vec![create_candidate("a", "Ana")];
    let qualified = qualify_matches(vec![create_result("a", 0.75)], &candidates);
    assert!(qualified[0].chat_unlocked);
}

#[test]
fn test_zodiac_all_twelve_signs() {
    let cases = [
        (4, 1, "Aries"),
        (5, 1, "Taurus"),
        (6, 1, "Gemini"),
        (7, 1, "Cancer"),
        (8, 1, "Leo"),
        (9, 1, "Virgo"),
        (10, 1, "Libra"),
        (11, 1, "Scorpio"),
        (12, 1, "Sagittarius"),
        (1, 1, "Capricorn"),
        (2, 1, "Aquarius"),
        (3, 1, "Pisces"),
    ];

    for (month, day, sign) in cases {
        let date = NaiveDate::from_ymd_opt(1990, month, day).unwrap();
        assert_eq!(zodiac_sign(date), sign, "month {} day {}", month, day);
    }
}

#[test]
fn test_compatibility_prompt_embeds_candidate_ids() {
    let user = UserProfile {
        name: "Ana".to_string(),
        values: vec!["honesty".to_string()],
        ..Default::default()
    };
    let candidates = vec![create_candidate("m-42", "Bea")];

    let prompt = prompts::compatibility_prompt(&user, &candidates);

    assert!(prompt.contains("m-42"));
    assert!(prompt.contains("Return ONLY valid JSON"));
}

#[test]
fn test_synastry_prompt_names_both_signs() {
    let user_birth = NaiveDate::from_ymd_opt(1995, 8, 5).unwrap();
    let match_birth = NaiveDate::from_ymd_opt(1993, 1, 25).unwrap();
    let prompt = prompts::synastry_prompt("Leo", user_birth, "Aquarius", match_birth);

    assert!(prompt.contains("Person 1: Leo (born 1995-08-05)"));
    assert!(prompt.contains("Person 2: Aquarius (born 1993-01-25)"));
}

#[test]
fn test_profile_serializes_camel_case() {
    let profile = UserProfile {
        name: "Ana".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1995, 8, 5),
        opt_in_astrology: true,
        work_schedule: Some("9-to-5".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["birthDate"], "1995-08-05");
    assert_eq!(json["optInAstrology"], true);
    assert_eq!(json["workSchedule"], "9-to-5");
}

#[test]
fn test_compatibility_result_wire_shape() {
    let json = r#"{
        "matchId": "m1",
        "score": 0.83,
        "explanation": "Strong value alignment.",
        "keyFactors": ["values", "schedule", "languages"]
    }"#;

    let result: CompatibilityResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.match_id, "m1");
    assert_eq!(result.score, 0.83);
    // list order is preserved
    assert_eq!(result.key_factors, vec!["values", "schedule", "languages"]);
}
