use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::AdapterConfig;
use crate::drivers::ollama::{ChatRequest, ChatResponse, CHAT_PATH};

/// Single-shot HTTP client for the chat endpoint. No retries; connection reuse is
/// whatever reqwest's default pool provides.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &AdapterConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }

    /// POST the request and wait for the complete reply.
    ///
    /// Dropping the returned future aborts the in-flight call.
    pub async fn post_chat(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        let url = self.chat_url();
        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            // best effort: a failed body read still reports the status
            let body = resp.text().await.unwrap_or_default();
            warn!(
                http_status = status.as_u16(),
                duration_ms = start.elapsed().as_millis() as u64,
                url = url.as_str(),
                "ollama chat request failed"
            );
            return Err(TransportError::Status {
                status: status_line(status),
                body,
            });
        }

        let body = resp.text().await?;
        debug!(
            bytes = body.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "ollama chat reply received"
        );

        serde_json::from_str::<ChatResponse>(&body).map_err(|e| {
            warn!(error = %e, "ollama chat reply could not be decoded");
            TransportError::Decode {
                message: e.to_string(),
                body,
            }
        })
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama API returned error: {status}, response: {body}")]
    Status { status: String, body: String },

    #[error("Failed to decode Ollama response: {message}, response: {body}")]
    Decode { message: String, body: String },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Transport error: {0}")]
    Other(String),
}
