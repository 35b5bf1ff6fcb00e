//! Projection of tool descriptors into Ollama's JSON-schema tool format.
//!
//! Never fails: the built-in element tool gets its fixed schema, every other tool gets
//! `"Tool: <name>"` and an empty, permissive object schema.

use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::{ChatFunctionSpec, ChatTool};
use crate::types::ToolDescriptor;

pub const ELEMENT_TOOL_NAME: &str = "get_element_info";

pub const ELEMENT_TOOL_DESCRIPTION: &str =
    "Get detailed information about a chemical element. Use this tool for ANY question about chemical elements.";

pub const ELEMENT_SYMBOL_DESCRIPTION: &str =
    "The element identifier - can be symbol (H, O, Au) or Chinese name (氢, 氧, 金)";

/// Project one tool into the backend descriptor.
pub fn project_tool(tool: &ToolDescriptor) -> ChatTool {
    let (description, parameters) = if tool.name == ELEMENT_TOOL_NAME {
        (ELEMENT_TOOL_DESCRIPTION.to_string(), element_tool_parameters())
    } else {
        debug!(tool = tool.name.as_str(), "no known schema for tool, using empty object");
        (format!("Tool: {}", tool.name), empty_parameters())
    };

    ChatTool {
        tool_type: "function".to_string(),
        function: ChatFunctionSpec {
            name: tool.name.clone(),
            description,
            parameters,
        },
    }
}

/// Project a tool set, ordered by name. A repeated name keeps its first descriptor.
pub fn project_tools(tools: &[ToolDescriptor]) -> Vec<ChatTool> {
    let mut by_name: BTreeMap<&str, &ToolDescriptor> = BTreeMap::new();
    for tool in tools {
        by_name.entry(tool.name.as_str()).or_insert(tool);
    }
    by_name.into_values().map(project_tool).collect()
}

fn element_tool_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "symbol": {
                "type": "string",
                "description": ELEMENT_SYMBOL_DESCRIPTION,
            }
        },
        "required": ["symbol"],
    })
}

fn empty_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {},
    })
}
