//! HTTP backend for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::GeminiError;

use super::prompt::build_request;

/// Maximum characters of an error body kept in [`GeminiError::HttpStatus`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// JSON pointer to the generated text in a `generateContent` response.
const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// One generation attempt: diff in, raw model text out.
///
/// This abstraction allows mocking the endpoint in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Ask the model for a commit message for `diff`. No retry.
    async fn generate(&self, diff: &str) -> Result<String, GeminiError>;
}

/// Backend that posts to the real endpoint.
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    system_instruction: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, GeminiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(GeminiError::ClientBuild)?;

        Ok(Self {
            http,
            endpoint: config.endpoint_url(),
            api_key: config.api_key.clone(),
            system_instruction: config.system_instruction.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, diff: &str) -> Result<String, GeminiError> {
        let request = build_request(
            &self.system_instruction,
            diff,
            self.temperature,
            self.max_output_tokens,
        );

        debug!(
            endpoint = %self.endpoint,
            diff_len = diff.len(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            // The request URL carries the key; never let it reach an error message.
            .map_err(|e| GeminiError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidJson(e.without_url().to_string()))?;

        let text = extract_text(&value).ok_or(GeminiError::MissingText)?;
        debug!(response_len = text.len(), "Received generated text");

        Ok(text.to_string())
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response.
///
/// Only presence matters here; an empty string is still returned.
pub fn extract_text(response: &Value) -> Option<&str> {
    response.pointer(TEXT_POINTER).and_then(Value::as_str)
}
