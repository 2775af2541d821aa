//! Chat completions adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{ChatCompletionsEngine, InferenceConfig, InferenceEngine, InferenceRequest};
use application::{
    error::ApplicationError,
    ports::{CompletionOptions, InferencePort, InferenceResult},
};
use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, instrument};

/// Adapter for a hosted OpenAI-compatible completion provider (Groq)
#[derive(Debug)]
pub struct ChatCompletionsInferenceAdapter {
    engine: ChatCompletionsEngine,
}

impl ChatCompletionsInferenceAdapter {
    /// Create a new adapter with the given configuration and API key
    pub fn new(config: InferenceConfig, api_key: SecretString) -> Result<Self, ApplicationError> {
        let engine = ChatCompletionsEngine::new(config, api_key).map_err(Self::map_error)?;

        Ok(Self { engine })
    }

    /// Convert ai_core error to application error
    fn map_error(e: ai_core::InferenceError) -> ApplicationError {
        match e {
            ai_core::InferenceError::ConnectionFailed(msg) => {
                ApplicationError::Inference(format!("Groq connection failed: {msg}"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for ChatCompletionsInferenceAdapter {
    #[instrument(
        skip(self, system_prompt, message),
        fields(message_len = message.len(), model = %self.engine.default_model())
    )]
    async fn generate_with_system(
        &self,
        system_prompt: &str,
        message: &str,
        options: CompletionOptions,
    ) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let request = InferenceRequest::with_system(system_prompt, message)
            .with_temperature(options.temperature)
            .with_max_tokens(options.max_tokens);

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(Self::map_error)?;

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms = latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }
}
