//! Model facade: the seam between the agent loop and a concrete backend.
//!
//! [`Llm::generate`] returns a lazy stream. Implementations in this crate always
//! produce exactly one element (a complete response or an error) and then end,
//! whether or not streaming was requested.

pub mod ollama;

use crate::types::{LlmRequest, LlmResponse};
use crate::BoxStream;

pub use ollama::OllamaLlm;

/// A chat model the agent can drive.
pub trait Llm: Send + Sync {
    /// Model name as sent to the backend.
    fn name(&self) -> &str;

    /// Run one round-trip for `request`. Nothing happens until the stream is polled.
    fn generate<'a>(&'a self, request: LlmRequest, stream: bool) -> BoxStream<'a, LlmResponse>;
}
