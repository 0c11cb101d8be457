use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::config::AppConfig;

pub mod types;

use types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

pub const EMPTY_RESPONSE_MESSAGE: &str = "Received an empty response from the API.";

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Non-2xx answer; carries `error.message` or a synthesized status line.
    #[error("{0}")]
    Status(String),
    #[error("{}", EMPTY_RESPONSE_MESSAGE)]
    EmptyResponse,
    /// Transport or decode failure. The URL is stripped first: it carries the key.
    #[error("{0}")]
    Http(reqwest::Error),
}

impl UpstreamError {
    fn http(err: reqwest::Error) -> Self {
        UpstreamError::Http(err.without_url())
    }
}

/// Thin client for the Gemini `generateContent` REST call.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.generate_url(),
        }
    }

    /// Sends `prompt` as one user turn and returns the first candidate's text, unmodified.
    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, UpstreamError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::single_turn(prompt))
            .send()
            .await
            .map_err(UpstreamError::http)?;

        let status = response.status();
        debug!(status = status.as_u16(), "gemini responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status(error_message(status, &body)));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(UpstreamError::http)?;
        data.first_text()
            .filter(|text| !text.is_empty())
            .ok_or(UpstreamError::EmptyResponse)
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|detail| detail.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("HTTP error! Status: {}", status.as_u16()))
}
