//! `get_element_info`: element lookup exposed as a tool.

use async_trait::async_trait;
use tracing::{info, warn};

use super::{error_result, Tool};
use crate::drivers::ollama::schema::{
    ELEMENT_SYMBOL_DESCRIPTION, ELEMENT_TOOL_DESCRIPTION, ELEMENT_TOOL_NAME,
};
use crate::periodic;
use crate::types::{ArgValue, Arguments, ParamSpec, ParamType, ToolDescriptor};

#[derive(Debug, Clone, Copy, Default)]
pub struct GetElementInfo;

#[async_trait]
impl Tool for GetElementInfo {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(ELEMENT_TOOL_NAME)
            .with_description(ELEMENT_TOOL_DESCRIPTION)
            .with_param(ParamSpec::required(
                "symbol",
                ParamType::String,
                ELEMENT_SYMBOL_DESCRIPTION,
            ))
    }

    async fn call(&self, args: &Arguments) -> ArgValue {
        element_info(args.get("symbol").and_then(|v| v.as_str()).unwrap_or(""))
    }
}

/// Look up `query` and format the result the way the model expects it.
pub fn element_info(query: &str) -> ArgValue {
    let query = query.trim();
    if query.is_empty() {
        return error_result("Element symbol or Chinese name is required.");
    }

    let Some(element) = periodic::lookup(query) else {
        warn!(query, "element not found");
        return error_result(format!(
            "Element symbol or Chinese name '{}' not found.",
            query
        ));
    };

    let report = format!(
        "{}({}), Atomic Number: {}, Atomic Weight: {:.4}",
        element.chinese_name, element.name, element.atomic_number, element.atomic_weight
    );
    info!(query, report = report.as_str(), "element found");
    ArgValue::object([("status", "success".to_string()), ("report", report)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(v: &'a ArgValue, key: &str) -> &'a str {
        v.get(key).and_then(|v| v.as_str()).unwrap()
    }

    #[test]
    fn test_found_by_symbol() {
        let result = element_info("Au");
        assert_eq!(field(&result, "status"), "success");
        assert_eq!(
            field(&result, "report"),
            "金(Gold), Atomic Number: 79, Atomic Weight: 196.9700"
        );
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(field(&element_info("  铁 "), "status"), "success");
    }

    #[test]
    fn test_missing_and_unknown() {
        assert_eq!(
            field(&element_info(""), "error_message"),
            "Element symbol or Chinese name is required."
        );
        let result = element_info("Xx");
        assert_eq!(field(&result, "status"), "error");
        assert_eq!(
            field(&result, "error_message"),
            "Element symbol or Chinese name 'Xx' not found."
        );
    }

    #[tokio::test]
    async fn test_tool_reads_symbol_argument() {
        let mut args = Arguments::new();
        args.insert("symbol".into(), ArgValue::from("O"));
        let result = GetElementInfo.call(&args).await;
        assert!(field(&result, "report").starts_with("氧(Oxygen)"));

        let result = GetElementInfo.call(&Arguments::new()).await;
        assert_eq!(field(&result, "status"), "error");
    }
}
