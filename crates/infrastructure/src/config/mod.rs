//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `email`: Resend client settings and the date-line timezone
//! - `credentials`: provider keys and the sender address
//!
//! Inference settings reuse [`ai_core::InferenceConfig`].

mod credentials;
mod email;
mod server;

use std::path::Path;

use ai_core::InferenceConfig;
use chrono_tz::Tz;
use config::{ConfigError, Environment, File, FileFormat, FileSourceFile, Map};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use credentials::CredentialsConfig;
pub use email::EmailAppConfig;
pub use server::ServerConfig;

/// Prefix for structured environment overrides, e.g. `MINUTES_SERVER__PORT`
pub const ENV_PREFIX: &str = "MINUTES";

/// Conventional variable holding the completion provider key
pub const COMPLETION_KEY_VAR: &str = "GROQ_API_KEY";

/// Conventional variable holding the email provider key
pub const EMAIL_KEY_VAR: &str = "RESEND_API_KEY";

/// Conventional variable holding the verified sender address
pub const EMAIL_FROM_VAR: &str = "EMAIL_FROM";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion provider configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Email provider configuration
    #[serde(default)]
    pub email: EmailAppConfig,

    /// Provider credentials
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the process
    /// environment
    pub fn load() -> Result<Self, ConfigError> {
        let env: Map<String, String> = std::env::vars().collect();
        Self::build(File::with_name("config").required(false), env)
    }

    /// Load configuration from an explicit file and environment map
    pub fn load_from(path: Option<&Path>, env: Map<String, String>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::build(File::from(path).required(true), env),
            None => Self::build(File::with_name("config").required(false), env),
        }
    }

    fn build(
        file: File<FileSourceFile, FileFormat>,
        env: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let completion_key = conventional(&env, COMPLETION_KEY_VAR);
        let email_key = conventional(&env, EMAIL_KEY_VAR);
        let email_from = conventional(&env, EMAIL_FROM_VAR);

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("inference.base_url", "https://api.groq.com/openai/v1")?
            .set_default("inference.default_model", "llama-3.3-70b-versatile")?
            .set_default("email.base_url", "https://api.resend.com")?
            .set_default("email.timezone", "UTC")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., MINUTES_SERVER__PORT)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .source(Some(env)),
            )
            // Conventional provider variables win over everything else
            .set_override_option("credentials.completion_api_key", completion_key)?
            .set_override_option("credentials.email_api_key", email_key)?
            .set_override_option("credentials.email_from", email_from)?;

        let config: Self = builder.build()?.try_deserialize()?;
        config.timezone()?;

        debug!(
            host = %config.server.host,
            port = config.server.port,
            has_completion_key = config.credentials.completion_api_key().is_some(),
            has_email_key = config.credentials.email_api_key().is_some(),
            has_sender = config.credentials.email_from().is_some(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Timezone for the summary date line
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.email.parsed_timezone().map_err(ConfigError::Message)
    }
}

fn conventional(env: &Map<String, String>, var: &str) -> Option<String> {
    env.get(var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
