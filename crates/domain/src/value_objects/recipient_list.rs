//! Non-empty, ordered list of validated recipients

use serde::Serialize;

use super::EmailAddress;
use crate::errors::DomainError;

/// Ordered recipients of one outbound message
///
/// Always holds at least one address. Order is the caller's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecipientList(Vec<EmailAddress>);

impl RecipientList {
    /// Build a list from already-validated addresses
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyList`] when `addresses` is empty.
    pub fn new(addresses: Vec<EmailAddress>) -> Result<Self, DomainError> {
        if addresses.is_empty() {
            return Err(DomainError::EmptyList("emails".to_string()));
        }
        Ok(Self(addresses))
    }

    /// Number of recipients
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Addresses as plain strings, in order
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}
