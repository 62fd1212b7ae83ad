//! Prompt builders, one per generation task.
//!
//! Every prompt embeds its structured inputs as JSON and ends with an
//! explicit instruction to return ONLY a JSON object of a stated shape; the
//! engine decodes against exactly that shape.

use chrono::NaiveDate;
use serde_json::json;

use crate::core::zodiac::zodiac_sign;
use crate::models::{MatchProfile, UserProfile};

fn pretty(value: &impl serde::Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

pub fn compatibility_prompt(user: &UserProfile, candidates: &[MatchProfile]) -> String {
    let astrology_clause = match (user.opt_in_astrology, user.birth_date) {
        (true, Some(birth_date)) => format!(
            "\n- Astrological compatibility (user is {})",
            zodiac_sign(birth_date)
        ),
        _ => String::new(),
    };
    let salary_clause = if user.opt_in_salary && user.salary_range.is_some() {
        "\n- Salary range alignment (if both provided)"
    } else {
        ""
    };

    format!(
        "You are an expert dating compatibility analyst. Analyze the user's profile against \
         potential matches and calculate compatibility scores.\n\n\
         User Profile:\n{user_json}\n\n\
         Potential Matches:\n{matches_json}\n\n\
         For each match, calculate a compatibility score from 0 to 1 based on:\n\
         - Shared values and interests (weighted high)\n\
         - Compatible work schedules and industries\n\
         - Language compatibility\n\
         - Lifestyle alignment\n\
         - Educational background compatibility{astrology_clause}{salary_clause}\n\
         - Overall personality and communication style fit\n\n\
         Provide a detailed explanation for each match score, highlighting 2-4 key \
         compatibility factors.\n\n\
         Return ONLY valid JSON in this exact format (no other text):\n\
         {{\n\
         \x20 \"results\": [\n\
         \x20   {{\n\
         \x20     \"matchId\": \"string\",\n\
         \x20     \"score\": number (0-1),\n\
         \x20     \"explanation\": \"string - 2-3 sentences explaining why this score\",\n\
         \x20     \"keyFactors\": [\"factor 1\", \"factor 2\", \"factor 3\"]\n\
         \x20   }}\n\
         \x20 ]\n\
         }}",
        user_json = pretty(user),
        matches_json = pretty(&candidates),
    )
}

pub fn daily_horoscope_prompt(birth_date: NaiveDate, sign: &str) -> String {
    format!(
        "Generate a personalized daily horoscope for someone born on {birth_date} ({sign}).\n\n\
         Make it:\n\
         - Specific and actionable (not generic)\n\
         - Positive and encouraging\n\
         - Related to love, career, or personal growth\n\
         - 3-4 sentences long\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n  \"reading\": \"string - the horoscope text\"\n}}"
    )
}

pub fn synastry_prompt(
    user_sign: &str,
    user_birth_date: NaiveDate,
    match_sign: &str,
    match_birth_date: NaiveDate,
) -> String {
    format!(
        "Analyze the astrological compatibility (synastry) between:\n\
         - Person 1: {user_sign} (born {user_birth_date})\n\
         - Person 2: {match_sign} (born {match_birth_date})\n\n\
         Provide:\n\
         1. Overall compatibility rating (Excellent/Good/Moderate/Challenging)\n\
         2. A 3-4 sentence explanation of their romantic compatibility based on sun signs\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n\
         \x20 \"compatibility\": \"string - Excellent/Good/Moderate/Challenging\",\n\
         \x20 \"explanation\": \"string - the explanation\"\n\
         }}"
    )
}

pub fn icebreaker_prompt(user: &UserProfile, candidate: &MatchProfile) -> String {
    let yours = json!({
        "name": user.name,
        "interests": user.interests,
        "values": user.values,
    });
    let theirs = json!({
        "name": candidate.profile.name,
        "interests": candidate.profile.interests,
        "bio": candidate.profile.bio,
    });

    format!(
        "Generate a personalized icebreaker message for starting a conversation.\n\n\
         Your profile: {yours}\n\
         Their profile: {theirs}\n\n\
         Create a friendly, natural opening message (1-2 sentences) that references a shared \
         interest or asks about something from their profile. Make it warm and genuine, not cheesy.\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n  \"message\": \"string - the icebreaker message\"\n}}"
    )
}

pub fn bio_prompt(user: &UserProfile) -> String {
    format!(
        "Write a short dating-app bio for this person based on their profile answers.\n\n\
         Profile:\n{profile_json}\n\n\
         Make it:\n\
         - 2-3 sentences, first person\n\
         - Warm and specific to their interests and values\n\
         - Free of cliches and emoji\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n  \"bio\": \"string - the bio text\"\n}}",
        profile_json = pretty(user),
    )
}

pub fn consistency_prompt(user: &UserProfile) -> String {
    format!(
        "You are reviewing a dating profile for internal consistency. Compare the person's \
         free-text answers, stated values, interests and lifestyle choices and look for \
         contradictions (for example: claims to love the outdoors but lists no related \
         interest, or conflicting answers about the same topic).\n\n\
         Profile:\n{profile_json}\n\n\
         Score authenticity from 0 to 100 (100 = fully consistent) and list any concrete \
         contradictions found as short flags. An empty flags list is expected for a \
         consistent profile.\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n\
         \x20 \"score\": number (0-100),\n\
         \x20 \"flags\": [\"string - one sentence per contradiction\"]\n\
         }}",
        profile_json = pretty(user),
    )
}

pub fn match_profiles_prompt(user: &UserProfile, count: u8) -> String {
    format!(
        "Generate {count} realistic dating-app candidate profiles that would plausibly appear \
         in this user's match pool. Vary names, interests, industries and personalities; do \
         not clone the user's profile.\n\n\
         User Profile:\n{profile_json}\n\n\
         Each candidate needs a unique \"id\" string, a \"name\", a short \"bio\", and \
         \"values\", \"interests\", \"lifestyle\" and \"languages\" arrays. Include \
         \"workSchedule\", \"industry\" and \"education\" where natural.\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n\
         \x20 \"matches\": [\n\
         \x20   {{ \"id\": \"string\", \"name\": \"string\", \"bio\": \"string\", \
         \"values\": [], \"interests\": [], \"lifestyle\": [], \"languages\": [] }}\n\
         \x20 ]\n\
         }}",
        profile_json = pretty(user),
    )
}

pub fn dating_tips_prompt(user: &UserProfile) -> String {
    format!(
        "Generate 4 personalized dating tips for this person, one for each category: \
         conversation, firstDate, relationship, selfGrowth.\n\n\
         Profile:\n{profile_json}\n\n\
         Each tip needs an \"id\", its \"category\", a short \"title\", a 2-3 sentence \
         \"content\", and a single \"emoji\".\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n\
         \x20 \"tips\": [\n\
         \x20   {{ \"id\": \"string\", \"category\": \"conversation|firstDate|relationship|selfGrowth\", \
         \"title\": \"string\", \"content\": \"string\", \"emoji\": \"string\" }}\n\
         \x20 ]\n\
         }}",
        profile_json = pretty(user),
    )
}

pub fn relationship_insight_prompt(user: &UserProfile) -> String {
    format!(
        "Analyze this dating profile and describe the person's relationship style.\n\n\
         Profile:\n{profile_json}\n\n\
         Provide a short titled summary, 2-4 relationship strengths, 1-3 growth areas, and \
         one small actionable challenge for the coming week.\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n\
         \x20 \"title\": \"string\",\n\
         \x20 \"description\": \"string - 2-3 sentences\",\n\
         \x20 \"strengths\": [\"string\"],\n\
         \x20 \"growthAreas\": [\"string\"],\n\
         \x20 \"weeklyChallenge\": \"string\"\n\
         }}",
        profile_json = pretty(user),
    )
}
