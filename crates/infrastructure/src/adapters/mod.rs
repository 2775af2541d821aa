//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod chat_completions_inference_adapter;
mod resend_email_adapter;

pub use chat_completions_inference_adapter::ChatCompletionsInferenceAdapter;
pub use resend_email_adapter::ResendEmailAdapter;
