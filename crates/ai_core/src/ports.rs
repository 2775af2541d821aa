//! Chat completion request/response types and the engine trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Request for inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Messages in the conversation
    pub messages: Vec<InferenceMessage>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One entry of the `messages` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceMessage {
    pub role: ChatRole,
    pub content: String,
}

impl InferenceMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

impl InferenceRequest {
    /// Create a request with system prompt
    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![InferenceMessage::system(system), InferenceMessage::user(user)],
            max_tokens: None,
            temperature: None,
        }
    }

    /// Set temperature
    #[must_use]
    pub const fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the output budget
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Text of the first choice; absent when the provider sent none
    pub content: Option<String>,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Port for inference engine implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Generate a complete response
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError>;

    /// Get the current default model
    fn default_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_request_with_system() {
        let req = InferenceRequest::with_system("You are helpful", "Hi");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, ChatRole::System);
        assert_eq!(req.messages[0].content, "You are helpful");
        assert_eq!(req.messages[1].role, ChatRole::User);
        assert_eq!(req.messages[1].content, "Hi");
    }

    #[test]
    fn inference_request_builders() {
        let req = InferenceRequest::with_system("s", "u")
            .with_temperature(0.3)
            .with_max_tokens(2048);
        assert_eq!(req.temperature, Some(0.3));
        assert_eq!(req.max_tokens, Some(2048));
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(InferenceMessage::system("s")).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(
            serde_json::to_value(ChatRole::Assistant).unwrap(),
            "assistant"
        );
    }

    #[test]
    fn request_skips_unset_options() {
        let req = InferenceRequest::with_system("s", "u");
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
    }
}
