//! Minimal function-calling loop: ask the model, run requested tools, feed results back,
//! until the model answers in text.

use futures::StreamExt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{Error, ErrorContext};
use crate::facade::Llm;
use crate::tools::{GetElementInfo, ToolSet};
use crate::types::{LlmRequest, Part, Turn};
use crate::Result;

pub const DEFAULT_INSTRUCTION: &str = "You are a helpful agent that provides information about chemical elements. \
Use the 'get_element_info' tool to look up element information by symbol or Chinese name.";

pub const DEFAULT_MAX_STEPS: usize = 8;

pub struct Agent {
    llm: Arc<dyn Llm>,
    instruction: String,
    tools: ToolSet,
    max_steps: usize,
}

impl Agent {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self {
            llm,
            instruction: DEFAULT_INSTRUCTION.to_string(),
            tools: ToolSet::new(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Agent preloaded with the element lookup tool.
    pub fn periodic_table(llm: Arc<dyn Llm>) -> Self {
        Self::new(llm).with_tools(ToolSet::new().with_tool(GetElementInfo))
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn with_tools(mut self, tools: ToolSet) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Answer one question. Each step is one model round-trip.
    pub async fn run(&self, question: &str) -> Result<String> {
        let mut contents = vec![Turn::system(self.instruction.clone()), Turn::user(question)];
        let tools = self.tools.descriptors();

        for step in 0..self.max_steps {
            let request = LlmRequest::new(contents.clone()).with_tools(tools.clone());
            let response = match self.llm.generate(request, false).next().await {
                Some(result) => result?,
                None => {
                    return Err(Error::agent_with_context(
                        "model produced no response",
                        ErrorContext::new()
                            .with_details(format!("step: {}", step))
                            .with_source("agent"),
                    ))
                }
            };

            let calls: Vec<_> = response.content.function_calls().cloned().collect();
            if calls.is_empty() {
                let answer = response.content.text().unwrap_or_default().to_string();
                info!(steps = step + 1, model = self.llm.name(), "agent finished");
                return Ok(answer);
            }

            contents.push(Turn::model(response.content.parts.clone()));
            for call in calls {
                debug!(step, tool = call.name.as_str(), "running tool");
                let result = self.tools.call(&call.name, &call.args).await;
                contents.push(Turn::tool_response(call.name, result));
            }
        }

        Err(Error::agent_with_context(
            format!("no final answer after {} steps", self.max_steps),
            ErrorContext::new()
                .with_field_path("agent.max_steps")
                .with_source("agent"),
        ))
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("llm", &self.llm.name())
            .field("tools", &self.tools)
            .field("max_steps", &self.max_steps)
            .finish()
    }
}
