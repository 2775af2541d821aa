//! OpenAI-compatible chat completions backend
//!
//! Works against any server exposing `POST /chat/completions` with bearer
//! authentication (Groq, OpenAI, local gateways).

mod client;

pub use client::ChatCompletionsEngine;
