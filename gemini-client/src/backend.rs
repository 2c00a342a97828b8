//! Generation backend abstraction.
//!
//! Callers program against [`GenerationBackend`] so the remote provider can be
//! swapped for [`FakeBackend`] in tests. The fake ships in the library proper
//! (not behind `cfg(test)`) so downstream integration tests can use it.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::GeminiError;

/// A binary attachment sent alongside the prompt text (e.g. a screenshot of a
/// problem). Encoded as inline base64 data on the wire.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One generation call: prompt text, ordered role instructions (sent as the
/// system instruction), and zero or more attachments.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub instructions: Vec<String>,
    pub attachments: Vec<Attachment>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, instructions: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            instructions,
            attachments: Vec::new(),
        }
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }
}

/// Asynchronous text-generation backend.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Execute one generation call and return the markdown content.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeminiError>;
}

/// Scripted backend for tests.
///
/// Responses are consumed in order; a single queued response is returned
/// repeatedly. Every request is recorded for later assertion.
pub struct FakeBackend {
    responses: Mutex<Vec<Result<String, GeminiError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeBackend {
    pub fn new(responses: Vec<Result<String, GeminiError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A backend that answers every call with the same text.
    pub fn always_ok(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// A backend that fails every call with the same error.
    pub fn always_error(error: GeminiError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Number of generation calls made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Snapshot of every request received, in call order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeminiError> {
        self.requests.lock().unwrap().push(request.clone());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        if responses.len() == 1 {
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}
