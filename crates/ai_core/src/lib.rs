//! AI Core - Chat completion client
//!
//! Talks to a hosted OpenAI-compatible chat-completions API (Groq by
//! default). One request per call, no streaming, no retries.

pub mod chat_completions;
pub mod config;
pub mod error;
pub mod ports;

pub use chat_completions::ChatCompletionsEngine;
pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ports::{
    ChatRole, InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage,
};
