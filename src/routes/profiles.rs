use actix_web::{web, HttpResponse, Responder};

use crate::models::{
    BioResponse, DeleteProfileResponse, SubmitProfileResponse, UserProfile,
};
use crate::routes::{generation_error, store_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles/{user_id}", web::put().to(submit_profile))
        .route("/profiles/{user_id}", web::get().to(get_profile))
        .route("/profiles/{user_id}", web::delete().to(delete_profile))
        .route("/profiles/{user_id}/bio", web::post().to(generate_bio));
}

/// Submit (or resubmit) a profile
///
/// PUT /api/v1/profiles/{user_id}
///
/// Runs the consistency analysis on the submitted answers, stamps the
/// authenticity score and flags onto the profile, and replaces the stored
/// record wholesale. A failed analysis fails the submission; the profile is
/// not stored half-annotated.
async fn submit_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UserProfile>,
) -> impl Responder {
    let user_id = path.into_inner();
    let mut profile = body.into_inner();

    tracing::info!("Profile submission for user: {}", user_id);

    let consistency = match state.engine.analyze_consistency(&profile).await {
        Ok(result) => result,
        Err(e) => return generation_error("Consistency analysis failed", e),
    };

    if !consistency.flags.is_empty() {
        tracing::info!(
            "Consistency flags for {}: {}",
            user_id,
            consistency.flags.join("; ")
        );
    }

    profile.authenticity_score = Some(consistency.score);
    profile.consistency_flags = Some(consistency.flags.clone());

    if let Err(e) = state.store.put(&user_id, &profile).await {
        return store_error("Failed to store profile", e);
    }

    HttpResponse::Ok().json(SubmitProfileResponse {
        profile,
        consistency,
    })
}

/// GET /api/v1/profiles/{user_id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.store.get(&user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => store_error("Failed to fetch profile", e),
    }
}

/// DELETE /api/v1/profiles/{user_id}
async fn delete_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.store.delete(&user_id).await {
        Ok(()) => HttpResponse::Ok().json(DeleteProfileResponse { success: true }),
        Err(e) => store_error("Failed to delete profile", e),
    }
}

/// Generate a bio from the stored profile
///
/// POST /api/v1/profiles/{user_id}/bio
async fn generate_bio(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    let profile = match state.store.get(&user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error("Failed to fetch profile", e),
    };

    match state.engine.generate_bio(&profile).await {
        Ok(bio) => HttpResponse::Ok().json(BioResponse { bio }),
        Err(e) => generation_error("Bio generation failed", e),
    }
}
