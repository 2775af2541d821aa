//! Domain entities - transient request and result records

mod distribution;
mod summarization;

pub use distribution::{DistributionRequest, DistributionResult, EMAILS_FIELD, SUMMARY_FIELD};
pub use summarization::{
    INSTRUCTION_FIELD, NO_SUMMARY_FALLBACK, SummarizationRequest, SummarizationResult,
    TRANSCRIPT_FIELD,
};
