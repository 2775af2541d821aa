//! Provider credentials and the verified sender address.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Credentials read once at startup
///
/// Usually populated from `GROQ_API_KEY`, `RESEND_API_KEY` and `EMAIL_FROM`.
/// Blank values count as absent.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Completion provider API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub completion_api_key: Option<SecretString>,

    /// Email provider API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub email_api_key: Option<SecretString>,

    /// Verified sender address
    #[serde(default)]
    pub email_from: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "completion_api_key",
                &if self.completion_api_key().is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field(
                "email_api_key",
                &if self.email_api_key().is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("email_from", &self.email_from)
            .finish()
    }
}

fn non_blank(secret: Option<&SecretString>) -> Option<&SecretString> {
    secret.filter(|s| !s.expose_secret().trim().is_empty())
}

impl CredentialsConfig {
    /// Completion provider key, if set and non-blank
    #[must_use]
    pub fn completion_api_key(&self) -> Option<&SecretString> {
        non_blank(self.completion_api_key.as_ref())
    }

    /// Email provider key, if set and non-blank
    #[must_use]
    pub fn email_api_key(&self) -> Option<&SecretString> {
        non_blank(self.email_api_key.as_ref())
    }

    /// Sender address, if set and non-blank
    #[must_use]
    pub fn email_from(&self) -> Option<&str> {
        self.email_from
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Length of the completion key, 0 when absent
    ///
    /// Reported by the diagnostics endpoint; the key itself never leaves
    /// the process.
    #[must_use]
    pub fn completion_key_length(&self) -> usize {
        self.completion_api_key()
            .map_or(0, |key| key.expose_secret().chars().count())
    }
}
