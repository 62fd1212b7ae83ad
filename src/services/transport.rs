use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::responses::GatewayError;
use crate::services::azure::{AzureError, AzureOpenAiClient};

/// One generation call, constructed per task invocation and discarded after
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: Option<String>,
    pub json_mode: bool,
}

impl GenerationRequest {
    pub fn json(prompt: String, model: Option<String>) -> Self {
        Self {
            prompt,
            model,
            json_mode: true,
        }
    }
}

/// Errors raised by a transport
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Gateway error ({status}): {message}")]
    Gateway { status: u16, message: String },

    #[error(transparent)]
    Azure(#[from] AzureError),
}

/// Strategy seam between the task adapters and the model
///
/// Selected once at startup; tasks never know which transport they run over.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, TransportError>;
}

/// In-process transport: calls the Azure client directly, no HTTP hop
pub struct BridgeTransport {
    azure: Arc<AzureOpenAiClient>,
}

impl BridgeTransport {
    pub fn new(azure: Arc<AzureOpenAiClient>) -> Self {
        Self { azure }
    }
}

#[async_trait]
impl GenerationTransport for BridgeTransport {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, TransportError> {
        let content = self
            .azure
            .complete(&request.prompt, request.model.as_deref(), request.json_mode)
            .await?;
        Ok(content)
    }
}

/// HTTP transport: posts to the Model Gateway's `/api/chat`
pub struct HttpTransport {
    gateway_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(gateway_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            gateway_url,
            client,
        }
    }
}

#[async_trait]
impl GenerationTransport for HttpTransport {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, TransportError> {
        let url = format!("{}/api/chat", self.gateway_url.trim_end_matches('/'));

        let body = serde_json::json!({
            "prompt": request.prompt,
            "model": request.model,
            "jsonMode": request.json_mode,
        });

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The gateway answers errors as { "error": ... }; fall back to a
            // generic message when the payload is something else.
            let message = response
                .json::<GatewayError>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| "LLM request failed".to_string());
            return Err(TransportError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        let chat: crate::models::responses::ChatResponse = response.json().await?;
        Ok(chat.content)
    }
}
