//! Domain-level errors

use thiserror::Error;

/// Errors raised while validating inbound requests
///
/// Every variant is a caller defect: none of them is ever produced after a
/// provider has been contacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// One or more required text fields are absent, not text, or empty
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingField(Vec<String>),

    /// The recipient field is not an ordered sequence
    #[error("{0} must be an array of email addresses")]
    ArrayRequired(String),

    /// The recipient sequence has no entries
    #[error("{0} must contain at least one recipient")]
    EmptyList(String),

    /// Entries that failed the email-format check, in input order
    #[error("Invalid email addresses: {}", .0.join(", "))]
    InvalidFormat(Vec<String>),
}

impl DomainError {
    /// Create a missing field error for a single field
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(vec![field.into()])
    }
}
