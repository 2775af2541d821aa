//! Summarization service - transcript in, summary out

use std::{fmt, sync::Arc};

use domain::{SummarizationRequest, SummarizationResult};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CompletionOptions, InferencePort},
};

/// Fixed system instruction for every summary
pub const SUMMARIZER_SYSTEM_PROMPT: &str = "You are an expert meeting notes summarizer. \
     Your task is to create clear, concise, and actionable summaries.";

/// Environment variable that holds the completion credential
const CREDENTIAL_VARIABLE: &str = "GROQ_API_KEY";

/// Service for summarizing transcripts
///
/// The inference port is absent when no completion credential was
/// configured at startup.
pub struct SummarizationService {
    inference: Option<Arc<dyn InferencePort>>,
    options: CompletionOptions,
}

impl fmt::Debug for SummarizationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizationService")
            .field("configured", &self.is_configured())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl SummarizationService {
    /// Create a new summarization service with default sampling options
    pub fn new(inference: Option<Arc<dyn InferencePort>>) -> Self {
        Self {
            inference,
            options: CompletionOptions::default(),
        }
    }

    /// Override the sampling options
    #[must_use]
    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether a completion provider is available
    pub const fn is_configured(&self) -> bool {
        self.inference.is_some()
    }

    /// Validate a raw JSON record and summarize it
    #[instrument(skip(self, record))]
    pub async fn summarize_record(
        &self,
        record: &Value,
    ) -> Result<SummarizationResult, ApplicationError> {
        let request = SummarizationRequest::from_record(record)?;
        self.summarize(&request).await
    }

    /// Summarize an already validated request
    #[instrument(
        skip(self, request),
        fields(
            transcript_len = request.transcript.len(),
            instruction_len = request.instruction.len()
        )
    )]
    pub async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResult, ApplicationError> {
        let Some(inference) = &self.inference else {
            warn!("Summarization requested without a completion provider");
            return Err(ApplicationError::unconfigured(CREDENTIAL_VARIABLE));
        };

        let result = inference
            .generate_with_system(SUMMARIZER_SYSTEM_PROMPT, &request.user_message(), self.options)
            .await?;

        debug!(
            model = %result.model,
            tokens = ?result.tokens_used,
            latency_ms = result.latency_ms,
            has_content = result.content.is_some(),
            "Completion received"
        );

        Ok(SummarizationResult::from_completion(result.content))
    }
}
