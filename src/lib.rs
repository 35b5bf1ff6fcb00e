//! # element-agent
//!
//! 通过本地 Ollama 模型的函数调用回答化学元素问题的小型智能体。
//!
//! A small function-calling agent that answers chemical-element questions with a locally
//! hosted Ollama chat model.
//!
//! ## Overview
//!
//! The interesting part is the model adapter: it translates a provider-agnostic
//! conversation (turns of text, function calls and function responses) into an Ollama
//! `/api/chat` request, performs a single non-streaming round-trip, and translates the
//! reply, including tool calls, back into a provider-agnostic turn.
//!
//! ```text
//! caller -> request translator -> transport (POST /api/chat) -> response translator -> caller
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use element_agent::{Agent, AdapterConfig, OllamaLlm};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> element_agent::Result<()> {
//!     let llm = OllamaLlm::new(AdapterConfig::from_env())?;
//!     let agent = Agent::periodic_table(Arc::new(llm));
//!     println!("{}", agent.run("What is the atomic weight of Au?").await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Conversation, tool and response types |
//! | [`drivers`] | Ollama wire format, schema projection and translations |
//! | [`transport`] | HTTP POST to the chat endpoint |
//! | [`facade`] | [`Llm`] trait and the [`OllamaLlm`] adapter |
//! | [`config`] | Adapter configuration |
//! | [`periodic`] | Element lookup table |
//! | [`tools`] | Tool trait, registry and `get_element_info` |
//! | [`agent`] | Function-calling loop |

pub mod agent;
pub mod config;
pub mod drivers;
pub mod facade;
pub mod periodic;
pub mod tools;
pub mod transport;
pub mod types;

pub use agent::Agent;
pub use config::AdapterConfig;
pub use facade::{Llm, OllamaLlm};
pub use types::{ArgValue, Arguments, LlmRequest, LlmResponse, Part, Role, ToolDescriptor, Turn};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
