//! Application services - Use case implementations

mod distribution_service;
mod summarization_service;

pub use distribution_service::{DistributionService, format_summary_date, summary_subject};
pub use summarization_service::{SUMMARIZER_SYSTEM_PROMPT, SummarizationService};
