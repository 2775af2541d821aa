//! Summarization request and result

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::DomainError, validation};

/// Wire name of the transcript field
pub const TRANSCRIPT_FIELD: &str = "transcript";
/// Wire name of the instruction field
pub const INSTRUCTION_FIELD: &str = "instruction";

/// Placeholder returned when the provider produced no text
pub const NO_SUMMARY_FALLBACK: &str = "No summary generated";

/// A validated request to summarize a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationRequest {
    /// Raw meeting transcript
    pub transcript: String,
    /// Free-form instruction describing the wanted summary
    pub instruction: String,
}

impl SummarizationRequest {
    /// Validate a candidate JSON record
    ///
    /// Both fields must be non-empty strings. Every failing field is named.
    pub fn from_record(record: &Value) -> Result<Self, DomainError> {
        validation::require_text_fields(record, &[TRANSCRIPT_FIELD, INSTRUCTION_FIELD])?;

        let field = |name: &str| {
            validation::text_field(record, name)
                .unwrap_or_default()
                .to_string()
        };
        Ok(Self {
            transcript: field(TRANSCRIPT_FIELD),
            instruction: field(INSTRUCTION_FIELD),
        })
    }

    /// The user message sent to the completion provider
    pub fn user_message(&self) -> String {
        format!("{}\n\nTranscript:\n{}", self.instruction, self.transcript)
    }
}

/// Generated summary text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationResult {
    pub summary: String,
}

impl SummarizationResult {
    /// Build a result from optional provider output
    ///
    /// Missing or empty output becomes [`NO_SUMMARY_FALLBACK`], so the
    /// summary is never empty. Whitespace-only output is kept as is.
    pub fn from_completion(content: Option<String>) -> Self {
        let summary = content
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string());
        Self { summary }
    }
}
