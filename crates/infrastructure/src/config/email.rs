//! Email provider configuration.

use chrono_tz::Tz;
use integration_resend::ResendConfig;
use serde::{Deserialize, Serialize};

/// Resend configuration plus the date-line timezone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAppConfig {
    /// Resend API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// IANA timezone used for "Meeting Summary - <date>"
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for EmailAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            timezone: default_timezone(),
        }
    }
}

impl EmailAppConfig {
    /// Parse the configured timezone
    pub fn parsed_timezone(&self) -> Result<Tz, String> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| format!("Unknown timezone: {}", self.timezone))
    }

    /// Client settings for the Resend integration
    pub fn to_resend_config(&self) -> ResendConfig {
        ResendConfig {
            base_url: self.base_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}
