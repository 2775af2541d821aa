//! Resend email integration
//!
//! Client for the Resend HTTP API (<https://resend.com/docs/api-reference>).
//! Every response is decoded into a [`SendOutcome`] before the HTTP status
//! is trusted, because Resend reports business failures as JSON payloads.

pub mod client;
mod models;

pub use client::{ResendClient, ResendConfig, ResendError, ResendHttpClient};
pub use models::{SendEmailRequest, SendOutcome, decode_send_response};
