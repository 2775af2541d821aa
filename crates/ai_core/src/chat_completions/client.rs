//! Chat completions client implementation

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::InferenceConfig,
    error::InferenceError,
    ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage},
};

/// Inference engine for OpenAI-compatible chat completion APIs
pub struct ChatCompletionsEngine {
    client: Client,
    config: InferenceConfig,
    api_key: SecretString,
}

impl fmt::Debug for ChatCompletionsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionsEngine")
            .field("base_url", &self.config.base_url)
            .field("default_model", &self.config.default_model)
            .finish_non_exhaustive()
    }
}

impl ChatCompletionsEngine {
    /// Create a new engine
    pub fn new(config: InferenceConfig, api_key: SecretString) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized chat completions engine"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

/// Wire-format chat request
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [InferenceMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Wire-format chat response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Error envelope used by OpenAI-compatible APIs
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the provider's message out of an error body, falling back to the raw text
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => format!("Status {status}"),
        Err(_) => format!("Status {status}: {body}"),
    }
}

#[async_trait]
impl InferenceEngine for ChatCompletionsEngine {
    #[instrument(skip(self, request), fields(model = %self.config.default_model))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let model = self.config.default_model.as_str();

        let body = ChatRequest {
            model,
            messages: &request.messages,
            temperature: request.temperature.unwrap_or(self.config.temperature),
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
        };

        debug!(messages = request.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::from_transport(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message(status, &text);

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                warn!(message = %message, "Chat completion rate limited");
                return Err(InferenceError::RateLimited(message));
            }

            warn!(status = %status, message = %message, "Chat completion request failed");
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let first = chat.choices.into_iter().next();
        let finish_reason = first.as_ref().and_then(|c| c.finish_reason.clone());
        let content = first.and_then(|c| c.message).and_then(|m| m.content);
        let usage = chat.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        debug!(
            tokens = ?usage.as_ref().map(|u| u.total_tokens),
            has_content = content.is_some(),
            "Chat completion finished"
        );

        Ok(InferenceResponse {
            content,
            model: chat.model.unwrap_or_else(|| model.to_string()),
            usage,
            finish_reason,
        })
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
