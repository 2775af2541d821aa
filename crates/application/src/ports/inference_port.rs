//! Inference port - Interface for LLM chat completions

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Default sampling temperature for summaries
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default maximum output budget in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Sampling parameters for a single completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Text of the first choice; `None` when the provider returned none
    pub content: Option<String>,
    /// Model used for generation
    pub model: String,
    /// Number of tokens used (if available)
    pub tokens_used: Option<u32>,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for inference operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a completion for one system prompt and one user message
    ///
    /// Exactly one provider round-trip; no retries.
    async fn generate_with_system(
        &self,
        system_prompt: &str,
        message: &str,
        options: CompletionOptions,
    ) -> Result<InferenceResult, ApplicationError>;
}
