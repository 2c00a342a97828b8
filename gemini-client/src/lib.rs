//! Minimal async client for the Google Generative Language (Gemini) REST API.
//!
//! The crate exposes three layers:
//! - [`types`]: the serde model of the `generateContent` request/response wire
//!   format (text parts, inline image data, system instructions).
//! - [`backend`]: the [`GenerationBackend`] trait that callers program
//!   against, plus a [`FakeBackend`] for tests.
//! - [`client`]: the `reqwest`-based [`GeminiClient`] implementation.

pub mod backend;
pub mod client;
pub mod error;
pub mod types;

pub use backend::{Attachment, FakeBackend, GenerationBackend, GenerationRequest};
pub use client::{GeminiClient, GeminiConfig};
pub use error::GeminiError;
