//! Conversation -> `/api/chat` request translation.

use tracing::{debug, warn};

use super::{project_tools, ChatFunctionCall, ChatMessage, ChatRequest, ChatRole, ChatToolCall};
use crate::error::{Error, ErrorContext};
use crate::types::value::arguments_to_json;
use crate::types::{ArgValue, FunctionResponse, LlmRequest, Part, Role, Turn};
use crate::Result;

/// Build the complete request body. Fails only on arguments that cannot be rendered as JSON.
pub fn build_chat_request(model: &str, temperature: f64, request: &LlmRequest) -> Result<ChatRequest> {
    Ok(ChatRequest {
        model: model.to_string(),
        messages: translate_contents(&request.contents)?,
        tools: project_tools(&request.tools),
        stream: false,
        temperature,
    })
}

/// Translate every turn in order. Turns that carry nothing sendable are dropped.
pub fn translate_contents(contents: &[Turn]) -> Result<Vec<ChatMessage>> {
    let mut messages = Vec::with_capacity(contents.len());
    for (index, turn) in contents.iter().enumerate() {
        match translate_turn(index, turn)? {
            Some(msg) => messages.push(msg),
            None => debug!(turn = index, role = %turn.role, "dropping turn with no sendable content"),
        }
    }
    Ok(messages)
}

fn translate_turn(index: usize, turn: &Turn) -> Result<Option<ChatMessage>> {
    if turn.parts.is_empty() {
        return Ok(None);
    }

    // A tool result stands alone: nothing else from the turn goes with it.
    let mut responses = turn.parts.iter().filter_map(|p| match p {
        Part::FunctionResponse(fr) if !fr.name.is_empty() => Some(fr),
        _ => None,
    });
    if let Some(response) = responses.next() {
        let dropped: Vec<&str> = responses.map(|fr| fr.name.as_str()).collect();
        if !dropped.is_empty() {
            warn!(
                turn = index,
                sent = response.name.as_str(),
                dropped = ?dropped,
                "turn carries several tool results, only the first is sent"
            );
        }
        let content = render_tool_result(index, response)?;
        return Ok(Some(ChatMessage::text(ChatRole::Tool, content)));
    }

    let text = turn.parts.iter().rev().find_map(|p| match p {
        Part::Text(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    });

    let mut tool_calls = Vec::new();
    for (part_index, part) in turn.parts.iter().enumerate() {
        if let Part::FunctionCall(call) = part {
            let arguments = arguments_to_json(&call.args).map_err(|e| {
                Error::translation_with_context(
                    "function call arguments cannot be represented as JSON",
                    ErrorContext::new()
                        .with_field_path(format!(
                            "contents[{}].parts[{}].args.{}",
                            index, part_index, e.path
                        ))
                        .with_details(format!("value: {}", e.value))
                        .with_source("request_translator"),
                )
            })?;
            tool_calls.push(ChatToolCall {
                id: format!("call_{}", tool_calls.len()),
                call_type: "function".to_string(),
                function: ChatFunctionCall {
                    name: call.name.clone(),
                    arguments,
                },
            });
        }
    }

    if text.is_none() && tool_calls.is_empty() {
        return Ok(None);
    }

    Ok(Some(ChatMessage {
        role: wire_role(turn.role),
        content: text,
        tool_calls: if tool_calls.is_empty() {
            None
        } else {
            Some(tool_calls)
        },
    }))
}

fn wire_role(role: Role) -> ChatRole {
    match role {
        Role::System => ChatRole::System,
        Role::User => ChatRole::User,
        Role::Model | Role::Assistant => ChatRole::Assistant,
        Role::Tool => ChatRole::Tool,
    }
}

/// Strings are sent as-is, everything else as compact JSON; no payload becomes `{}`.
fn render_tool_result(index: usize, response: &FunctionResponse) -> Result<String> {
    match &response.response {
        ArgValue::String(s) if !s.is_empty() => return Ok(s.clone()),
        ArgValue::String(_) => return Ok("{}".to_string()),
        v if v.is_empty() => return Ok("{}".to_string()),
        _ => {}
    }
    let value = response.response.to_json().map_err(|e| {
        Error::translation_with_context(
            "function response cannot be represented as JSON",
            ErrorContext::new()
                .with_field_path(if e.path.is_empty() {
                    format!("contents[{}].response", index)
                } else {
                    format!("contents[{}].response.{}", index, e.path)
                })
                .with_details(format!("tool: {}, value: {}", response.name, e.value))
                .with_source("request_translator"),
        )
    })?;
    serde_json::to_string(&value).map_err(|e| {
        Error::translation_with_context(
            e.to_string(),
            ErrorContext::new()
                .with_field_path(format!("contents[{}].response", index))
                .with_source("request_translator"),
        )
    })
}
