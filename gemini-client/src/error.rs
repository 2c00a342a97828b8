//! Error taxonomy for Gemini API calls.
//!
//! Variants carry string payloads rather than source errors so they stay
//! `Clone`-able and can be queued by [`crate::FakeBackend`] in tests.

/// Errors produced while constructing a client or executing a generation call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeminiError {
    #[error("API key is missing or empty")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("prompt was blocked by the provider: {0}")]
    Blocked(String),

    #[error("provider returned no candidates")]
    EmptyResponse,

    #[error("malformed provider response: {0}")]
    InvalidResponse(String),
}
