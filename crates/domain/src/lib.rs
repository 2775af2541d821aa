//! Domain layer for the meeting minutes service
//!
//! Contains the request and result entities, validated value objects,
//! the inbound field validator, and domain errors. Nothing in this crate
//! performs I/O.

pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
