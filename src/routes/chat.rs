use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::models::{ChatRequest, ChatResponse, GatewayError};
use crate::services::{AzureError, AzureOpenAiClient};

/// State for the Model Gateway endpoint
///
/// `azure` is `None` when the upstream endpoint or credential is missing from
/// configuration; every request then short-circuits with the fixed 500 body.
#[derive(Clone)]
pub struct GatewayState {
    pub azure: Option<Arc<AzureOpenAiClient>>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat_completion));
}

/// Model Gateway endpoint
///
/// POST /api/chat
///
/// Request body:
/// ```json
/// {
///   "prompt": "string",
///   "model": "string",
///   "jsonMode": false
/// }
/// ```
///
/// Relays the prompt to Azure OpenAI and returns `{ "content": "..." }`.
/// The configuration check runs before the body is inspected, and upstream
/// failures propagate with their original status code.
async fn chat_completion(state: web::Data<GatewayState>, body: web::Bytes) -> impl Responder {
    let azure = match &state.azure {
        Some(azure) => azure,
        None => {
            return HttpResponse::InternalServerError().json(GatewayError {
                error: "Azure OpenAI is not configured.".to_string(),
            });
        }
    };

    // An absent or unreadable body counts the same as a missing prompt.
    let req: ChatRequest = serde_json::from_slice(&body).unwrap_or(ChatRequest {
        prompt: String::new(),
        model: None,
        json_mode: false,
    });

    if req.prompt.is_empty() {
        return HttpResponse::BadRequest().json(GatewayError {
            error: "prompt is required.".to_string(),
        });
    }

    tracing::debug!(
        "Gateway request: model={:?}, jsonMode={}, prompt_len={}",
        req.model,
        req.json_mode,
        req.prompt.len()
    );

    match azure
        .complete(&req.prompt, req.model.as_deref(), req.json_mode)
        .await
    {
        Ok(content) => HttpResponse::Ok().json(ChatResponse { content }),
        Err(AzureError::Upstream { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(GatewayError {
                error: format!("Azure OpenAI error: {}", body),
            })
        }
        Err(e) => {
            tracing::error!("Gateway request failed: {}", e);
            HttpResponse::InternalServerError().json(GatewayError {
                error: e.to_string(),
            })
        }
    }
}
