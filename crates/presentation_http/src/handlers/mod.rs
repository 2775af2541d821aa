//! HTTP request handlers

pub mod send;
pub mod summarize;
pub mod system;
