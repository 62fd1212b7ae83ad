// Route exports
pub mod chat;
pub mod insights;
pub mod matches;
pub mod profiles;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{AiEngine, EngineError};
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{ProfileStore, StoreError};

/// Application state shared across the versioned API handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AiEngine>,
    pub store: Arc<ProfileStore>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(chat::configure)
            .service(
                web::scope("/v1")
                    .route("/health", web::get().to(health_check))
                    .configure(profiles::configure)
                    .configure(matches::configure)
                    .configure(insights::configure),
            ),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Map a generation failure onto the versioned error envelope
pub(crate) fn generation_error(context: &str, e: EngineError) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    match e {
        EngineError::MalformedResponse { .. } => HttpResponse::BadGateway().json(ErrorResponse {
            error: "Malformed model response".to_string(),
            message: e.to_string(),
            status_code: 502,
        }),
        EngineError::Transport(_) => HttpResponse::BadGateway().json(ErrorResponse {
            error: "Generation failed".to_string(),
            message: e.to_string(),
            status_code: 502,
        }),
    }
}

/// Map a profile-store failure onto the versioned error envelope
pub(crate) fn store_error(context: &str, e: StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound(user_id) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: format!("No profile stored for user {}", user_id),
            status_code: 404,
        }),
        other => {
            tracing::error!("{}: {}", context, other);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Profile store error".to_string(),
                message: other.to_string(),
                status_code: 500,
            })
        }
    }
}
