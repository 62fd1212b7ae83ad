use crate::models::{CompatibilityResult, MatchProfile, QualifiedMatch};

/// Minimum compatibility score for a match to surface and for chat to unlock.
///
/// The single definition; the match pipeline and the icebreaker gate both
/// read it from here.
pub const CHAT_UNLOCK_THRESHOLD: f64 = 0.70;

/// Whether a compatibility score clears the chat-unlock gate
pub fn chat_unlocked(score: f64) -> bool {
    score >= CHAT_UNLOCK_THRESHOLD
}

/// Turn raw compatibility verdicts into the ranked, joined match list
///
/// # Pipeline stages
/// 1. Drop verdicts below the chat-unlock threshold
/// 2. Stable sort descending by score (ties keep their filter order)
/// 3. Join each survivor to its candidate profile by id; verdicts whose id
///    has no candidate are dropped silently
pub fn qualify_matches(
    results: Vec<CompatibilityResult>,
    candidates: &[MatchProfile],
) -> Vec<QualifiedMatch> {
    let mut qualified: Vec<CompatibilityResult> = results
        .into_iter()
        .filter(|r| r.score >= CHAT_UNLOCK_THRESHOLD)
        .collect();

    // Vec::sort_by is stable, so equal scores keep their relative order
    qualified.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    qualified
        .into_iter()
        .filter_map(|result| {
            let profile = candidates.iter().find(|c| c.id == result.match_id)?;
            Some(QualifiedMatch {
                profile: profile.clone(),
                chat_unlocked: chat_unlocked(result.score),
                compatibility: result,
            })
        })
        .collect()
}
