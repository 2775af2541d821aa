//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod email_delivery_port;
mod inference_port;
mod summary_renderer_port;

pub use email_delivery_port::{DeliveryOutcome, EmailDeliveryPort, OutboundEmail};
#[cfg(test)]
pub use email_delivery_port::MockEmailDeliveryPort;
pub use inference_port::{
    CompletionOptions, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, InferencePort, InferenceResult,
};
#[cfg(test)]
pub use inference_port::MockInferencePort;
pub use summary_renderer_port::{RenderedEmail, SummaryEmail, SummaryRendererPort};
#[cfg(test)]
pub use summary_renderer_port::MockSummaryRendererPort;
