//! Application-level errors

use domain::DomainError;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (caller supplied bad input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Required process configuration is absent
    #[error("{0}")]
    Unconfigured(String),

    /// The email provider explicitly declined the message
    #[error("Email service error")]
    ProviderRejected {
        /// Raw provider diagnostic, passed through untouched
        detail: Value,
    },

    /// Completion provider failure
    #[error("Failed to generate summary: {0}")]
    Inference(String),

    /// Email transport failure
    #[error("Failed to send email: {0}")]
    Delivery(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Missing configuration entry, named by its environment variable
    pub fn unconfigured(variable: &str) -> Self {
        Self::Unconfigured(format!("{variable} is not configured"))
    }
}
