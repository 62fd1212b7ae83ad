use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{chat_unlocked, qualify_matches, CHAT_UNLOCK_THRESHOLD};
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, IcebreakerRequest, IcebreakerResponse,
};
use crate::routes::{generation_error, store_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matches/find", web::post().to(find_matches))
        .route("/matches/icebreaker", web::post().to(icebreaker));
}

/// Find qualified matches for a user
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "candidateCount": 6
/// }
/// ```
///
/// Generates a candidate pool, scores the user against it, then filters by
/// the chat-unlock threshold, sorts descending by score and joins verdicts
/// back to their candidates. An empty list is a valid outcome, not an error.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;
    tracing::info!(
        "Finding matches for user: {}, candidates: {}",
        user_id,
        req.candidate_count
    );

    let profile = match state.store.get(user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error("Failed to fetch profile", e),
    };

    let candidates = match state
        .engine
        .generate_candidates(&profile, req.candidate_count)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => return generation_error("Candidate generation failed", e),
    };

    let results = match state.engine.score_compatibility(&profile, &candidates).await {
        Ok(results) => results,
        Err(e) => return generation_error("Compatibility scoring failed", e),
    };

    let total_candidates = candidates.len();
    let matches = qualify_matches(results, &candidates);

    tracing::info!(
        "Returning {} qualified matches for user {} (from {} candidates)",
        matches.len(),
        user_id,
        total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches,
        total_candidates,
    })
}

/// Generate an icebreaker opener toward one match
///
/// POST /api/v1/matches/icebreaker
///
/// Refused with 403 when the supplied compatibility score is below the
/// chat-unlock threshold; the gate uses the same constant as the match
/// pipeline.
async fn icebreaker(
    state: web::Data<AppState>,
    req: web::Json<IcebreakerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if !chat_unlocked(req.compatibility_score) {
        return HttpResponse::Forbidden().json(ErrorResponse {
            error: "Chat locked".to_string(),
            message: format!(
                "A compatibility score of at least {:.2} is required to start a conversation",
                CHAT_UNLOCK_THRESHOLD
            ),
            status_code: 403,
        });
    }

    let profile = match state.store.get(&req.user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error("Failed to fetch profile", e),
    };

    match state.engine.icebreaker(&profile, &req.match_profile).await {
        Ok(message) => HttpResponse::Ok().json(IcebreakerResponse { message }),
        Err(e) => generation_error("Icebreaker generation failed", e),
    }
}
