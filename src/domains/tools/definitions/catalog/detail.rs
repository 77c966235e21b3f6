//! Tool detail definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{not_found_result, structured_result};
use crate::domains::catalog::{CatalogStore, Category, Tool as CatalogTool};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogGetToolParams {
    /// Tool id (slug), e.g. "chatgpt".
    #[schemars(description = "Tool id as returned by catalog_search, e.g. 'chatgpt'")]
    pub id: String,
}

/// Structured output: the full record plus its resolved category.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDetail<'a> {
    pub tool: &'a CatalogTool,
    pub category: Option<&'a Category>,
}

/// Tool detail - everything the directory knows about one tool.
pub struct CatalogGetToolTool;

impl CatalogGetToolTool {
    pub const NAME: &'static str = "catalog_get_tool";

    pub const DESCRIPTION: &'static str = "Get the full directory entry for one AI tool by id: tagline, description, category, pricing, features, use cases, pros and cons, rating, launch date and tags.";

    /// Look a tool up by id. A miss is an error result, not a protocol error.
    #[instrument(skip(store))]
    pub fn execute(params: &CatalogGetToolParams, store: &CatalogStore) -> CallToolResult {
        let id = params.id.trim();
        info!("Catalog detail for: {}", id);

        let tool = match store.find_tool_by_id(id) {
            Ok(tool) => tool,
            Err(e) => return not_found_result(&e),
        };
        let category = store.category_of(tool).ok();

        let detail = ToolDetail { tool, category };
        structured_result(render_detail(tool, category), &detail)
    }

    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<CatalogStore>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: CatalogGetToolParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &store)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CatalogGetToolParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("AI tool details".into()),
        }
    }

    pub fn create_route<S>(store: Arc<CatalogStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let params: CatalogGetToolParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &store))
            }
            .boxed()
        })
    }
}

fn render_detail(tool: &CatalogTool, category: Option<&Category>) -> String {
    let mut out = format!("# {}", tool.name);
    if tool.featured {
        out.push_str(" (featured)");
    }
    out.push_str(&format!("\n{}\n\n{}\n", tool.tagline, tool.description));

    out.push_str(&format!(
        "\nCategory: {}\nPricing: {}\nRating: {:.1}/5 ({} reviews)\nLaunched: {}\nWebsite: {}\n",
        category.map_or(tool.category_id.as_str(), |c| c.name.as_str()),
        tool.pricing,
        tool.rating,
        tool.review_count,
        tool.launch_date.format("%Y-%m-%d"),
        tool.website_url
    ));

    for (title, items) in [
        ("Subcategories", &tool.subcategories),
        ("Features", &tool.features),
        ("Use cases", &tool.use_cases),
        ("Pros", &tool.pros),
        ("Cons", &tool.cons),
    ] {
        if !items.is_empty() {
            out.push_str(&format!("\n## {}\n", title));
            for item in items {
                out.push_str(&format!("- {}\n", item));
            }
        }
    }

    if !tool.tags.is_empty() {
        out.push_str(&format!("\nTags: {}\n", tool.tags.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    fn params(id: &str) -> CatalogGetToolParams {
        CatalogGetToolParams { id: id.to_string() }
    }

    #[test]
    fn test_get_tool_found() {
        let store = CatalogStore::seed().unwrap();
        let result = CatalogGetToolTool::execute(&params("elevenlabs"), &store);
        assert!(!result.is_error.unwrap_or(false));

        let data = result.structured_content.as_ref().unwrap();
        assert_eq!(data["tool"]["id"], "elevenlabs");
        assert_eq!(data["category"]["id"], "audio");

        let text = text(&result);
        assert!(text.starts_with("# ElevenLabs (featured)"));
        assert!(text.contains("Category: Audio & Speech"));
        assert!(text.contains("voice-synthesis"));
    }

    #[test]
    fn test_get_tool_trims_id() {
        let store = CatalogStore::seed().unwrap();
        let result = CatalogGetToolTool::execute(&params("  chatgpt "), &store);
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_get_tool_not_found() {
        let store = CatalogStore::seed().unwrap();
        let result = CatalogGetToolTool::execute(&params("does-not-exist"), &store);
        assert!(result.is_error.unwrap_or(false));
        assert!(text(&result).contains("Tool not found"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_get_tool_http_missing_id() {
        let store = Arc::new(CatalogStore::seed().unwrap());
        let result = CatalogGetToolTool::http_handler(serde_json::json!({}), store);
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
