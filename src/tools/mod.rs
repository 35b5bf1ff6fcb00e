//! Tools the agent can offer to the model.

pub mod element;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

use crate::types::{ArgValue, Arguments, ToolDescriptor};

pub use element::GetElementInfo;

/// A callable capability. Failures are reported in the returned value, not as errors,
/// so the model can read them.
#[async_trait]
pub trait Tool: Send + Sync {
    fn descriptor(&self) -> ToolDescriptor;

    async fn call(&self, args: &Arguments) -> ArgValue;
}

/// Name-ordered tool registry.
#[derive(Clone, Default)]
pub struct ToolSet {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool; a tool with the same name is replaced.
    pub fn with_tool(mut self, tool: impl Tool + 'static) -> Self {
        self.register(Arc::new(tool));
        self
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.descriptor().name;
        self.tools.insert(name, tool);
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Descriptors ordered by tool name.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.values().map(|t| t.descriptor()).collect()
    }

    pub async fn call(&self, name: &str, args: &Arguments) -> ArgValue {
        match self.tools.get(name) {
            Some(tool) => tool.call(args).await,
            None => {
                warn!(tool = name, "model requested an unknown tool");
                error_result(format!("Unknown tool '{}'.", name))
            }
        }
    }
}

impl std::fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSet")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// `{status: "error", error_message}` result value.
pub fn error_result(message: impl Into<String>) -> ArgValue {
    ArgValue::object([
        ("status", ArgValue::from("error")),
        ("error_message", ArgValue::String(message.into())),
    ])
}
