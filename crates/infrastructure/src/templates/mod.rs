//! Template engine for the summary email
//!
//! Uses Tera with templates embedded at compile time:
//! - `summary/email.html`: styled HTML body, summary auto-escaped
//! - `summary/email.txt`: plain-text mirror
//!
//! # Example
//!
//! ```rust,ignore
//! use application::ports::SummaryEmail;
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let email = SummaryEmail {
//!     summary: "Budget approved.".to_string(),
//!     date: "October 19, 2026".to_string(),
//! };
//!
//! let html = engine.render_template("summary/email.html", &email)?;
//! ```

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{RenderedEmail, SummaryEmail, SummaryRendererPort},
};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::instrument;

/// HTML summary template name
pub const SUMMARY_HTML: &str = "summary/email.html";

/// Plain-text summary template name
pub const SUMMARY_TEXT: &str = "summary/email.txt";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Invalid template context
    #[error("Invalid context: {0}")]
    Context(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

impl From<TemplateError> for ApplicationError {
    fn from(e: TemplateError) -> Self {
        Self::Internal(e.to_string())
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const SUMMARY_HTML: &str = r#"<div style="font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px;">
  <h1 style="color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px;">Meeting Summary</h1>
  <p style="color: #666; margin-bottom: 20px;">Generated on {{ date }}</p>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 5px; border-left: 4px solid #007bff;">
    <pre style="white-space: pre-wrap; font-family: inherit; margin: 0; line-height: 1.6;">{{ summary }}</pre>
  </div>
  <hr style="margin: 30px 0; border: none; border-top: 1px solid #ddd;">
  <p style="color: #999; font-size: 12px; text-align: center;">This summary was generated automatically using AI-powered meeting notes summarizer.</p>
</div>
"#;

    pub const SUMMARY_TEXT: &str = "Meeting Summary - {{ date }}\n\n{{ summary }}\n\n---\nThis summary was generated automatically using AI-powered meeting notes summarizer.";
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        // HTML bodies only; the text mirror keeps the summary verbatim
        tera.autoescape_on(vec![".html", ".htm"]);

        tera.add_raw_template(SUMMARY_HTML, embedded::SUMMARY_HTML)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template(SUMMARY_TEXT, embedded::SUMMARY_TEXT)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with any serializable context
    pub fn render_template<T: Serialize>(
        &self,
        template_name: &str,
        data: &T,
    ) -> Result<String, TemplateError> {
        let context =
            Context::from_serialize(data).map_err(|e| TemplateError::Context(e.to_string()))?;

        self.tera
            .render(template_name, &context)
            .map_err(TemplateError::from)
    }
}

impl SummaryRendererPort for TemplateEngine {
    #[instrument(skip(self, email), fields(summary_len = email.summary.len()))]
    fn render(&self, email: &SummaryEmail) -> Result<RenderedEmail, ApplicationError> {
        Ok(RenderedEmail {
            html: self.render_template(SUMMARY_HTML, email)?,
            text: self.render_template(SUMMARY_TEXT, email)?,
        })
    }
}
