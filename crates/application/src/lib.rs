//! Application layer - Use cases and orchestration
//!
//! Contains the summarization and distribution use cases and the port
//! definitions they depend on. Provider adapters in the infrastructure
//! layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
