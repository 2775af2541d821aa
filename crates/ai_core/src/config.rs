//! Configuration for inference engine

use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
///
/// The API key is not part of this struct; it is passed to the engine
/// separately as a secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the OpenAI-compatible API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

const fn default_max_tokens() -> u32 {
    2048
}

const fn default_temperature() -> f32 {
    0.3
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}
