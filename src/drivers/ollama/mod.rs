//! Ollama `/api/chat` driver — native tool-call support, non-streaming mode only.
//!
//! Key differences from OpenAI-style chat APIs:
//! - Tool-call `arguments` are a JSON object, not a JSON-encoded string.
//! - Tool calls in replies often carry neither `id` nor `type`.
//! - The non-streaming reply is a single object `{model, created_at, message, done}`
//!   rather than a `choices` array.
//! - Tool results are plain `role: "tool"` messages without a call id.

pub mod request;
pub mod response;
pub mod schema;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

pub use request::{build_chat_request, translate_contents};
pub use response::{translate_message, translate_response};
pub use schema::{project_tool, project_tools};

/// Sampling temperature sent with every request.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Chat endpoint path, appended to the configured base URL.
pub const CHAT_PATH: &str = "/api/chat";

/// Message role in Ollama's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Tool,
}

/// Wire-level message. Either plain content, tool calls, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ChatToolCall>>,
}

impl ChatMessage {
    pub fn text(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_calls: None,
        }
    }
}

/// Tool invocation inside a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatToolCall {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: ChatFunctionCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatFunctionCall {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_arguments")]
    pub arguments: Map<String, Value>,
}

/// Tool descriptor offered to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: ChatFunctionSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatFunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ChatTool>,
    pub stream: bool,
    pub temperature: f64,
}

/// Non-streaming reply of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub created_at: String,
    pub message: ChatMessage,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub done_reason: Option<String>,
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
}

fn function_type() -> String {
    "function".to_string()
}

/// Accepts the object form Ollama uses as well as the JSON-string form of
/// OpenAI-compatible servers. Anything else degrades to empty arguments.
fn deserialize_arguments<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        Value::String(s) if s.trim().is_empty() => Map::new(),
        Value::String(s) => match serde_json::from_str::<Value>(&s) {
            Ok(Value::Object(map)) => map,
            _ => {
                warn!(arguments = s.as_str(), "tool call arguments are not a JSON object, using empty arguments");
                Map::new()
            }
        },
        other => {
            warn!(arguments = %other, "tool call arguments are not a JSON object, using empty arguments");
            Map::new()
        }
    })
}
