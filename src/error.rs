use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "contents[2].parts[0].args", "config.base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., offending value)
    pub details: Option<String>,
    /// Source of the error (e.g., "request_translator", "config")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the adapter and the agent built on top of it.
///
/// Every failure is terminal for the call that produced it; nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be converted into the backend wire format.
    #[error("Translation error: {message}{}", format_context(.context))]
    Translation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Agent error: {message}{}", format_context(.context))]
    Agent {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn translation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Translation {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn agent_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Agent {
            message: msg.into(),
            context,
        }
    }

    pub fn is_translation(&self) -> bool {
        matches!(self, Error::Translation { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Translation { context, .. }
            | Error::Configuration { context, .. }
            | Error::Agent { context, .. } => Some(context),
            Error::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_appended_to_display() {
        let err = Error::translation_with_context(
            "non-finite number in function call arguments",
            ErrorContext::new()
                .with_field_path("contents[1].parts[0].args.weight")
                .with_source("request_translator"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Translation error: non-finite number"));
        assert!(msg.contains("field: contents[1].parts[0].args.weight"));
        assert!(msg.contains("source: request_translator"));
        assert!(err.is_translation());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_empty_context_adds_nothing() {
        let err = Error::agent_with_context("step limit reached", ErrorContext::default());
        assert_eq!(err.to_string(), "Agent error: step limit reached");
    }

    #[test]
    fn test_transport_error_has_no_context() {
        let err: Error = TransportError::Cancelled.into();
        assert!(err.is_transport());
        assert!(err.context().is_none());
    }
}
