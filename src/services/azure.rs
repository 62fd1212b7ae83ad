use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling Azure OpenAI
#[derive(Debug, Error)]
pub enum AzureError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-success upstream status, carried verbatim so the gateway can
    /// propagate it to the caller.
    #[error("Azure OpenAI error: {body}")]
    Upstream { status: u16, body: String },
}

/// Azure OpenAI chat-completions client
///
/// One user-role message per request, fixed sampling temperature, optional
/// JSON-object response constraint. The credential stays inside this client;
/// callers only ever see the extracted text content.
pub struct AzureOpenAiClient {
    endpoint: String,
    api_key: String,
    api_version: String,
    default_deployment: String,
    temperature: f64,
    client: Client,
}

impl AzureOpenAiClient {
    pub fn new(
        endpoint: String,
        api_key: String,
        api_version: String,
        default_deployment: String,
        temperature: f64,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            api_version,
            default_deployment,
            temperature,
            client,
        }
    }

    pub fn default_deployment(&self) -> &str {
        &self.default_deployment
    }

    fn completions_url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(deployment),
            self.api_version
        )
    }

    /// Run one chat completion and return the first-choice message text.
    ///
    /// A successful response with no choices yields an empty string rather
    /// than an error; that matches the relay contract.
    pub async fn complete(
        &self,
        prompt: &str,
        deployment: Option<&str>,
        json_mode: bool,
    ) -> Result<String, AzureError> {
        let deployment = deployment.unwrap_or(&self.default_deployment);
        let url = self.completions_url(deployment);

        let mut body = json!({
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
        });
        if json_mode {
            body["response_format"] = json!({ "type": "json_object" });
        }

        tracing::debug!("Calling Azure OpenAI deployment: {}", deployment);

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Azure OpenAI returned {}: {}", status, body);
            return Err(AzureError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;
        let content = data
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        Ok(content)
    }
}
