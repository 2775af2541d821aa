//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to inference server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded; carries the provider's message
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// The provider answered with an error status
    ///
    /// `message` is the provider's own error message when the body carried
    /// one, otherwise the raw body.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl InferenceError {
    /// Map a transport error, reporting timeouts with the configured limit
    pub fn from_transport(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
