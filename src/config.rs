//! Adapter configuration with environment-driven defaults.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `OLLAMA_MODEL` | `qwen2.5` | Model name (an `ollama_chat/` or `ollama/` prefix is stripped) |
//! | `OLLAMA_API_BASE` | `http://localhost:11434` | Server base URL |
//! | `OLLAMA_TIMEOUT_SECS` | unset | Optional whole-request timeout |

use std::env;
use std::time::Duration;

use crate::drivers::ollama::DEFAULT_TEMPERATURE;
use crate::error::{Error, ErrorContext};
use crate::Result;

pub const DEFAULT_MODEL: &str = "qwen2.5";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

const MODEL_PREFIXES: &[&str] = &["ollama_chat/", "ollama/"];

/// Immutable settings of one adapter instance.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    /// `None` leaves deadlines to the caller.
    pub timeout: Option<Duration>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }
}

impl AdapterConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self::default().with_model(model)
    }

    /// Defaults overridden by `OLLAMA_*` variables. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(model) = non_empty_env("OLLAMA_MODEL") {
            config = config.with_model(model);
        }
        if let Some(base_url) = non_empty_env("OLLAMA_API_BASE") {
            config = config.with_base_url(base_url);
        }
        config.timeout = env::var("OLLAMA_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        let stripped = MODEL_PREFIXES
            .iter()
            .find_map(|p| model.strip_prefix(p))
            .unwrap_or(&model)
            .to_string();
        self.model = stripped;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check that the model is set and the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "model name is empty",
                ErrorContext::new()
                    .with_field_path("config.model")
                    .with_source("config"),
            ));
        }
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone())
                    .with_source("config"),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("unsupported URL scheme '{}'", parsed.scheme()),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone())
                    .with_source("config"),
            ));
        }
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
