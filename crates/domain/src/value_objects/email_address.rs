//! Email address value object with validation
//!
//! Addresses are accepted when they match `local-part@domain.tld` with no
//! whitespace and exactly one `@` per side. The original text is kept
//! verbatim (no case folding, no trimming) so it reaches the email provider
//! exactly as the caller typed it.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! let email = EmailAddress::new("alice@example.com").unwrap();
//! assert_eq!(email.as_str(), "alice@example.com");
//!
//! assert!(EmailAddress::new("not-an-email").is_err());
//! assert!(EmailAddress::new("a b@example.com").is_err());
//! ```

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex compiles")
});

/// A validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidFormat`] carrying the rejected input.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidFormat(vec![value]))
        }
    }

    /// Check a candidate string against the address pattern
    pub fn is_valid(candidate: &str) -> bool {
        EMAIL_PATTERN.is_match(candidate)
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
