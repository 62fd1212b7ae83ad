use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, ProfileRequest, SynastryRequest, TipsResponse};
use crate::routes::{generation_error, store_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/horoscope", web::post().to(daily_horoscope))
        .route("/synastry", web::post().to(synastry))
        .route("/insights/tips", web::post().to(dating_tips))
        .route("/insights/profile", web::post().to(relationship_insight));
}

/// Daily horoscope for the stored birth date
///
/// POST /api/v1/horoscope
///
/// Requires the user to have opted into astrology and stored a birth date.
async fn daily_horoscope(
    state: web::Data<AppState>,
    req: web::Json<ProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = match state.store.get(&req.user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error("Failed to fetch profile", e),
    };

    let birth_date = match (profile.opt_in_astrology, profile.birth_date) {
        (true, Some(birth_date)) => birth_date,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Astrology not enabled".to_string(),
                message: "The profile has no birth date or has not opted into astrology"
                    .to_string(),
                status_code: 400,
            });
        }
    };

    match state.engine.daily_horoscope(birth_date).await {
        Ok(reading) => HttpResponse::Ok().json(reading),
        Err(e) => generation_error("Horoscope generation failed", e),
    }
}

/// Synastry reading between two birth dates
///
/// POST /api/v1/synastry
async fn synastry(state: web::Data<AppState>, req: web::Json<SynastryRequest>) -> impl Responder {
    match state
        .engine
        .synastry(req.user_birth_date, req.match_birth_date)
        .await
    {
        Ok(reading) => HttpResponse::Ok().json(reading),
        Err(e) => generation_error("Synastry generation failed", e),
    }
}

/// Personalized dating tips from the stored profile
///
/// POST /api/v1/insights/tips
async fn dating_tips(state: web::Data<AppState>, req: web::Json<ProfileRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = match state.store.get(&req.user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error("Failed to fetch profile", e),
    };

    match state.engine.dating_tips(&profile).await {
        Ok(tips) => HttpResponse::Ok().json(TipsResponse { tips }),
        Err(e) => generation_error("Tips generation failed", e),
    }
}

/// Relationship-style insight from the stored profile
///
/// POST /api/v1/insights/profile
async fn relationship_insight(
    state: web::Data<AppState>,
    req: web::Json<ProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = match state.store.get(&req.user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error("Failed to fetch profile", e),
    };

    match state.engine.relationship_insight(&profile).await {
        Ok(insight) => HttpResponse::Ok().json(insight),
        Err(e) => generation_error("Insight generation failed", e),
    }
}
