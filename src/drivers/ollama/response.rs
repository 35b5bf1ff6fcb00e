//! `/api/chat` reply -> provider-agnostic response translation.

use super::{ChatMessage, ChatResponse};
use crate::types::value::arguments_from_json;
use crate::types::{LlmResponse, Part, Role, Turn, UsageInfo};

/// Convert the single non-streaming reply into a complete assistant turn.
pub fn translate_response(response: ChatResponse) -> LlmResponse {
    let usage = match (response.prompt_eval_count, response.eval_count) {
        (None, None) => None,
        (prompt, completion) => {
            let prompt_tokens = prompt.unwrap_or(0);
            let completion_tokens = completion.unwrap_or(0);
            Some(UsageInfo {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            })
        }
    };

    LlmResponse {
        content: translate_message(response.message),
        turn_complete: true,
        partial: false,
        finish_reason: response.done_reason,
        usage,
    }
}

/// Tool calls take precedence over text; a reply with neither yields a turn with no parts.
pub fn translate_message(message: ChatMessage) -> Turn {
    let calls = message.tool_calls.unwrap_or_default();
    let parts = if !calls.is_empty() {
        calls
            .into_iter()
            .map(|call| Part::function_call(call.function.name, arguments_from_json(call.function.arguments)))
            .collect()
    } else {
        match message.content {
            Some(text) if !text.is_empty() => vec![Part::Text(text)],
            _ => Vec::new(),
        }
    };
    Turn::new(Role::Assistant, parts)
}
