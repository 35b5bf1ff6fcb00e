use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::Llm;
use crate::config::AdapterConfig;
use crate::drivers::ollama::{build_chat_request, translate_response};
use crate::transport::{HttpTransport, TransportError};
use crate::types::{LlmRequest, LlmResponse};
use crate::{BoxStream, Result};

/// Ollama chat adapter. Stateless apart from its configuration, so one instance
/// can serve concurrent `generate` calls.
#[derive(Debug, Clone)]
pub struct OllamaLlm {
    config: AdapterConfig,
    transport: HttpTransport,
}

impl OllamaLlm {
    pub fn new(config: AdapterConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(AdapterConfig::from_env())
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Like [`Llm::generate`], but a fired `cancel` token aborts the in-flight call and
    /// the single element becomes [`TransportError::Cancelled`].
    pub fn generate_with_cancel<'a>(
        &'a self,
        request: LlmRequest,
        stream: bool,
        cancel: CancellationToken,
    ) -> BoxStream<'a, LlmResponse> {
        Box::pin(futures::stream::once(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(model = self.config.model.as_str(), "ollama chat request cancelled");
                    Err(TransportError::Cancelled.into())
                }
                res = self.generate_once(&request, stream) => res,
            }
        }))
    }

    async fn generate_once(&self, request: &LlmRequest, stream: bool) -> Result<LlmResponse> {
        if stream {
            debug!("streaming requested, replying with one complete response");
        }

        let chat_request =
            build_chat_request(&self.config.model, self.config.temperature, request)?;
        debug!(
            model = chat_request.model.as_str(),
            messages = chat_request.messages.len(),
            tools = chat_request.tools.len(),
            "sending ollama chat request"
        );

        let start = Instant::now();
        let reply = self.transport.post_chat(&chat_request).await?;
        let response = translate_response(reply);

        info!(
            model = self.config.model.as_str(),
            duration_ms = start.elapsed().as_millis() as u64,
            parts = response.content.parts.len(),
            tool_calls = response.content.function_calls().count(),
            "ollama chat round-trip completed"
        );
        Ok(response)
    }
}

impl Llm for OllamaLlm {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn generate<'a>(&'a self, request: LlmRequest, stream: bool) -> BoxStream<'a, LlmResponse> {
        Box::pin(futures::stream::once(async move {
            self.generate_once(&request, stream).await
        }))
    }
}
