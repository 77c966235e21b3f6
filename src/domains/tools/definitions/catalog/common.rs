//! Common utilities shared across catalog tools.
//!
//! Result builders, the compact tool summary used by listings, and the
//! argument parsing shared by the HTTP handlers.

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::catalog::{CatalogError, CatalogStore, PricingTier, Tool};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;
#[cfg(feature = "http")]
use serde::de::DeserializeOwned;

/// Compact view of a tool used in listings.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub category_id: String,
    pub category_name: Option<String>,
    pub pricing: PricingTier,
    pub rating: f32,
    pub review_count: u32,
    pub launch_date: String,
    pub featured: bool,
    pub website_url: String,
}

impl ToolSummary {
    pub fn from_tool(tool: &Tool, store: &CatalogStore) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            tagline: tool.tagline.clone(),
            category_id: tool.category_id.clone(),
            category_name: store.category_of(tool).ok().map(|c| c.name.clone()),
            pricing: tool.pricing,
            rating: tool.rating,
            review_count: tool.review_count,
            launch_date: tool.launch_date.format("%Y-%m-%d").to_string(),
            featured: tool.featured,
            website_url: tool.website_url.clone(),
        }
    }
}

/// Summaries for a listing, keeping its order.
pub fn summarize(tools: &[&Tool], store: &CatalogStore) -> Vec<ToolSummary> {
    tools
        .iter()
        .map(|tool| ToolSummary::from_tool(tool, store))
        .collect()
}

/// One line per tool, numbered, for the text part of a result.
pub fn format_listing(tools: &[ToolSummary]) -> String {
    tools
        .iter()
        .enumerate()
        .map(|(idx, t)| {
            format!(
                "{}. {} ({}) - {} [{}, {:.1}/5 from {} reviews, launched {}]",
                idx + 1,
                t.name,
                t.id,
                t.tagline,
                t.pricing,
                t.rating,
                t.review_count,
                t.launch_date
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result carrying a text summary and structured data.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    match serde_json::to_value(data) {
        Ok(value) => {
            let mut result = success_result(summary);
            result.structured_content = Some(value);
            result
        }
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Turn a catalog lookup miss into a tool-level error result.
///
/// Misses are an ordinary answer ("no such tool"), so they are reported in
/// the result rather than as a protocol error.
pub fn not_found_result(err: &CatalogError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Map a caller error from the catalog onto an MCP protocol error.
pub fn invalid_params(err: CatalogError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

/// Parse the pricing tier names a client sent.
pub fn parse_pricing(values: &[String]) -> Result<Vec<PricingTier>, CatalogError> {
    values.iter().map(|v| v.parse()).collect()
}

/// Deserialize tool arguments for the HTTP transport.
#[cfg(feature = "http")]
pub fn parse_arguments<P: DeserializeOwned>(arguments: serde_json::Value) -> Result<P, ToolError> {
    let arguments = if arguments.is_null() {
        serde_json::json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Wrap a tool result in the JSON shape the HTTP transport returns.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "structuredContent": result.structured_content,
        "isError": result.is_error.unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "http")]
    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        #[serde(default)]
        name: String,
    }

    #[test]
    fn test_summary_resolves_category_name() {
        let store = CatalogStore::seed().unwrap();
        let tool = store.find_tool_by_id("elevenlabs").unwrap();
        let summary = ToolSummary::from_tool(tool, &store);
        assert_eq!(summary.category_name.as_deref(), Some("Audio & Speech"));
        assert_eq!(summary.launch_date, "2022-06-17");
    }

    #[test]
    fn test_format_listing_numbers_lines() {
        let store = CatalogStore::seed().unwrap();
        let tools: Vec<_> = store.list_tools().iter().take(2).collect();
        let text = format_listing(&summarize(&tools, &store));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. Midjourney (midjourney)"));
        assert!(lines[1].starts_with("2. ChatGPT (chatgpt)"));
    }

    #[test]
    fn test_structured_result_sets_both_parts() {
        let result = structured_result("two".to_string(), &serde_json::json!({ "n": 2 }));
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.structured_content, Some(serde_json::json!({ "n": 2 })));
    }

    #[test]
    fn test_parse_pricing() {
        let tiers = parse_pricing(&["free".to_string(), "Paid".to_string()]).unwrap();
        assert_eq!(tiers, vec![PricingTier::Free, PricingTier::Paid]);
        assert!(parse_pricing(&["cheap".to_string()]).is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_parse_arguments() {
        let probe: Probe = parse_arguments(serde_json::json!({ "name": "x" })).unwrap();
        assert_eq!(probe.name, "x");
        let probe: Probe = parse_arguments(serde_json::Value::Null).unwrap();
        assert!(probe.name.is_empty());
        let err = parse_arguments::<Probe>(serde_json::json!({ "name": 3 })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
