//! Request and response envelopes exchanged between the agent and a model.

use super::message::Turn;
use super::tool::ToolDescriptor;

/// Everything a model needs for one round-trip.
#[derive(Debug, Clone, Default)]
pub struct LlmRequest {
    pub contents: Vec<Turn>,
    pub tools: Vec<ToolDescriptor>,
}

impl LlmRequest {
    pub fn new(contents: Vec<Turn>) -> Self {
        Self {
            contents,
            tools: Vec::new(),
        }
    }

    pub fn with_tools(mut self, tools: Vec<ToolDescriptor>) -> Self {
        self.tools = tools;
        self
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageInfo {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// A model reply. This adapter always returns complete, non-partial turns.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: Turn,
    pub turn_complete: bool,
    pub partial: bool,
    pub finish_reason: Option<String>,
    pub usage: Option<UsageInfo>,
}
