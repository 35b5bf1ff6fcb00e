//! 类型系统模块：与具体后端无关的对话、工具与响应类型。
//!
//! # Types Module
//!
//! Provider-agnostic representations of everything the agent hands to a model and
//! everything a model hands back.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Turn`] | One conversation entry: a [`Role`] plus ordered [`Part`]s |
//! | [`Part`] | Text, a function call, or a function response |
//! | [`ArgValue`] | Tagged value used for tool arguments and results |
//! | [`ToolDescriptor`] | Name, description and typed parameters of a tool |
//! | [`LlmRequest`] / [`LlmResponse`] | One model round-trip |
//!
//! ## Example
//!
//! ```rust
//! use element_agent::types::{ArgValue, Arguments, Part, Turn, ToolDescriptor, ParamSpec, ParamType};
//!
//! let question = Turn::user("What is the atomic weight of Au?");
//!
//! let mut args = Arguments::new();
//! args.insert("symbol".to_string(), ArgValue::from("Au"));
//! let call = Turn::model(vec![Part::function_call("get_element_info", args)]);
//!
//! let tool = ToolDescriptor::new("get_element_info")
//!     .with_description("Get information about a chemical element")
//!     .with_param(ParamSpec::required("symbol", ParamType::String, "Element symbol"));
//! # let _ = (question, call, tool);
//! ```

pub mod llm;
pub mod message;
pub mod tool;
pub mod value;

pub use llm::{LlmRequest, LlmResponse, UsageInfo};
pub use message::{FunctionCall, FunctionResponse, Part, Role, Turn};
pub use tool::{ParamSpec, ParamType, ToolDescriptor};
pub use value::{ArgValue, Arguments};
