//! Category browsing tool definition.
//!
//! Mirrors the directory's category page: one category (or all of them)
//! with its tools in the requested order.

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

use super::common::{
    ToolSummary, format_listing, invalid_params, not_found_result, structured_result, summarize,
};
use crate::domains::catalog::{CatalogError, CatalogStore, Category, CategoryView, SortKey};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CatalogBrowseCategoryParams {
    #[schemars(description = "Category id; omit or use 'all' to browse every category")]
    #[serde(default)]
    pub category: Option<String>,

    #[schemars(description = "Sort order: 'newest' (default), 'popular', 'rating' or 'alphabetical'")]
    #[serde(default)]
    pub sort_by: Option<String>,
}

/// Structured output for a category page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage<'a> {
    pub category: Option<&'a Category>,
    pub sort: SortKey,
    pub tool_count: usize,
    pub tools: Vec<ToolSummary>,
}

pub struct CatalogBrowseCategoryTool;

impl CatalogBrowseCategoryTool {
    pub const NAME: &'static str = "catalog_browse_category";

    pub const DESCRIPTION: &'static str = "Browse one category of the AI tool directory (or all categories) with its tools sorted by newest, popular, rating or alphabetical. Unlike catalog_search, an unknown category id is reported as not found.";

    /// Build the category page.
    ///
    /// Unknown sort keys are `Err`; an unknown category is an error result.
    #[instrument(skip(store))]
    pub fn execute(
        params: &CatalogBrowseCategoryParams,
        store: &CatalogStore,
    ) -> Result<CallToolResult, CatalogError> {
        let sort = SortKey::from_param(params.sort_by.as_deref())?;
        let view = match CategoryView::build(store, params.category.as_deref(), sort) {
            Ok(view) => view,
            Err(e) if e.is_not_found() => return Ok(not_found_result(&e)),
            Err(e) => return Err(e),
        };

        let title = view
            .category
            .map_or("All categories".to_string(), |c| format!("{} {}", c.icon, c.name));
        info!("Browsing {} ({} tools)", title, view.tool_count);

        let tools = summarize(&view.tools, store);
        let text = if tools.is_empty() {
            format!("{}: no tools listed yet.", title)
        } else {
            format!(
                "{}: {} tool(s), sorted by {}:\n{}",
                title,
                view.tool_count,
                view.sort,
                format_listing(&tools)
            )
        };

        let page = CategoryPage {
            category: view.category,
            sort: view.sort,
            tool_count: view.tool_count,
            tools,
        };
        Ok(structured_result(text, &page))
    }

    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<CatalogStore>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: CatalogBrowseCategoryParams = parse_arguments(arguments)?;
        let result = Self::execute(&params, &store)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(http_response(result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CatalogBrowseCategoryParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Browse an AI tool category".into()),
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
                let params: CatalogBrowseCategoryParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&params, &store).map_err(invalid_params)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn browse(category: Option<&str>, sort_by: Option<&str>) -> Result<CallToolResult, CatalogError> {
        let store = CatalogStore::seed().unwrap();
        let params = CatalogBrowseCategoryParams {
            category: category.map(str::to_string),
            sort_by: sort_by.map(str::to_string),
        };
        CatalogBrowseCategoryTool::execute(&params, &store)
    }

    fn tool_ids(result: &CallToolResult) -> Vec<String> {
        result.structured_content.as_ref().unwrap()["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_browse_all_alphabetical() {
        let result = browse(None, Some("alphabetical")).unwrap();
        assert_eq!(
            tool_ids(&result),
            vec![
                "chatgpt",
                "elevenlabs",
                "github-copilot",
                "midjourney",
                "notion-ai",
                "runway-ml"
            ]
        );
        assert!(result.structured_content.as_ref().unwrap()["category"].is_null());
    }

    #[test]
    fn test_browse_single_category() {
        let result = browse(Some("audio"), None).unwrap();
        assert_eq!(tool_ids(&result), vec!["elevenlabs"]);
        let data = result.structured_content.as_ref().unwrap();
        assert_eq!(data["category"]["name"], "Audio & Speech");
        assert_eq!(data["sort"], "newest");
    }

    #[test]
    fn test_browse_empty_category() {
        let result = browse(Some("writing"), None).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert!(tool_ids(&result).is_empty());
        match &result.content[0].raw {
            RawContent::Text(text) => assert!(text.text.contains("no tools listed yet")),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_browse_unknown_category_is_not_found() {
        let result = browse(Some("teleportation"), None).unwrap();
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_browse_invalid_sort_key() {
        let err = browse(Some("audio"), Some("hot")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSortKey(_)));
    }
}
