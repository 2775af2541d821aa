//! Summary renderer port - turns a summary into email bodies

#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// Values available to the summary email templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEmail {
    /// Summary text, unescaped
    pub summary: String,
    /// Human-readable date, e.g. "October 19, 2026"
    pub date: String,
}

/// Rendered HTML and plain-text bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub html: String,
    pub text: String,
}

/// Port for rendering summary emails
#[cfg_attr(test, automock)]
pub trait SummaryRendererPort: Send + Sync {
    /// Render both bodies for one summary
    ///
    /// The HTML body must escape the summary.
    fn render(&self, email: &SummaryEmail) -> Result<RenderedEmail, ApplicationError>;
}
