//! 后端驱动层 — 将通用对话请求转换为具体后端的线上格式
//!
//! Backend driver layer. A driver owns the wire vocabulary of one chat backend and the
//! pure translations between that vocabulary and the provider-agnostic [`crate::types`].
//! Drivers never perform I/O; sending is the job of [`crate::transport`].

pub mod ollama;

pub use ollama::{build_chat_request, project_tools, translate_response, ChatRequest, ChatResponse};
