//! HTTP implementation of [`GenerationBackend`] against the Generative
//! Language REST API.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;

use crate::backend::{GenerationBackend, GenerationRequest};
use crate::error::GeminiError;
use crate::types::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, Part,
};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Async client for `models/{model}:generateContent`.
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Build a client, validating the credential up front. A blank API key is
    /// rejected here so the caller can treat construction failure as an
    /// initialization error before any request is attempted.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeminiError::ClientBuild(e.to_string()))?;

        Ok(Self { config, http })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }

    fn build_body(request: &GenerationRequest) -> GenerateContentRequest {
        let system_instruction = if request.instructions.is_empty() {
            None
        } else {
            Some(Content::system(
                request
                    .instructions
                    .iter()
                    .map(|line| Part::text(line.clone()))
                    .collect(),
            ))
        };

        let mut parts = vec![Part::text(request.prompt.clone())];
        for attachment in &request.attachments {
            let encoded = base64::engine::general_purpose::STANDARD.encode(&attachment.data);
            parts.push(Part::inline_data(attachment.mime_type.clone(), encoded));
        }

        GenerateContentRequest {
            system_instruction,
            contents: vec![Content::user(parts)],
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeminiError> {
        let body = Self::build_body(request);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = request.prompt.len(),
            attachments = request.attachments.len(),
            "sending generateContent request"
        );

        let response = self
            .http
            .post(self.request_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout(self.config.timeout_secs)
                } else {
                    GeminiError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .ok()
                .and_then(|envelope| envelope.error)
                .map(|body| body.message)
                .unwrap_or(text);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
        {
            return Err(GeminiError::Blocked(reason));
        }

        parsed.text().ok_or(GeminiError::EmptyResponse)
    }
}
