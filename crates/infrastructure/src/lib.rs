//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Groq and Resend adapters, the summary email templates,
//! configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, CredentialsConfig, EmailAppConfig, ServerConfig};
pub use telemetry::{DEFAULT_LOG_FILTER, LogFormat, TelemetryError, init_logging};
pub use templates::{TemplateEngine, TemplateError};
