//! Mock Ollama server setup for integration tests

#![allow(dead_code)]

use element_agent::{AdapterConfig, OllamaLlm};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;

pub const CHAT_PATH: &str = "/api/chat";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Adapter pointed at the mock server
    pub fn adapter(&self) -> OllamaLlm {
        OllamaLlm::new(AdapterConfig::new("qwen2.5").with_base_url(&self.base_url))
            .expect("adapter config should be valid")
    }

    /// Successful `/api/chat` reply wrapping `message`
    pub async fn mock_chat_reply(&mut self, body_matcher: Matcher, message: Value) -> Mock {
        let body = chat_reply(message);
        self.server
            .mock("POST", CHAT_PATH)
            .match_header("content-type", "application/json")
            .match_body(body_matcher)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Raw response with arbitrary status and body
    pub async fn mock_raw_response(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", CHAT_PATH)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn chat_reply(message: Value) -> Value {
    serde_json::json!({
        "model": "qwen2.5",
        "created_at": "2024-11-01T10:00:00.000000Z",
        "message": message,
        "done": true,
        "done_reason": "stop",
        "prompt_eval_count": 42,
        "eval_count": 7
    })
}
