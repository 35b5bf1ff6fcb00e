//! Provider-agnostic conversation model: turns made of text, function calls and function responses.

use super::value::{ArgValue, Arguments};
use std::fmt;

/// Role of a conversation turn.
///
/// `Model` is the agent framework's name for the assistant; it is sent as `assistant` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    System,
    User,
    Model,
    Assistant,
    Tool,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Model => "model",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request from the model to invoke a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Arguments,
}

/// The result of a tool invocation, fed back to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResponse {
    pub name: String,
    pub response: ArgValue,
}

/// A single content item within a turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    FunctionCall(FunctionCall),
    FunctionResponse(FunctionResponse),
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(text.into())
    }

    pub fn function_call(name: impl Into<String>, args: Arguments) -> Self {
        Part::FunctionCall(FunctionCall {
            name: name.into(),
            args,
        })
    }

    pub fn function_response(name: impl Into<String>, response: ArgValue) -> Self {
        Part::FunctionResponse(FunctionResponse {
            name: name.into(),
            response,
        })
    }
}

/// One message-equivalent unit of a conversation. Order of turns is chronological.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self { role, parts }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, vec![Part::text(text)])
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    pub fn model(parts: Vec<Part>) -> Self {
        Self::new(Role::Model, parts)
    }

    pub fn tool_response(name: impl Into<String>, response: ArgValue) -> Self {
        Self::new(Role::Tool, vec![Part::function_response(name, response)])
    }

    /// Last text part of the turn, if any.
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().rev().find_map(|p| match p {
            Part::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn function_calls(&self) -> impl Iterator<Item = &FunctionCall> {
        self.parts.iter().filter_map(|p| match p {
            Part::FunctionCall(fc) => Some(fc),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
