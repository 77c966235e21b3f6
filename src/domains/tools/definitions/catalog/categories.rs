//! Category listing tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::common::structured_result;
use crate::domains::catalog::{CatalogStore, Category};

#[cfg(feature = "http")]
use super::common::http_response;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CatalogListCategoriesParams {}

/// A category together with the number of catalog tools filed under it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    /// Tools in this catalog carrying the category id. `tool_count` is
    /// the advertised figure and is usually much larger.
    pub listed_tools: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing<'a> {
    pub categories: Vec<CategoryEntry<'a>>,
}

/// Category listing - every category in catalog order.
pub struct CatalogListCategoriesTool;

impl CatalogListCategoriesTool {
    pub const NAME: &'static str = "catalog_list_categories";

    pub const DESCRIPTION: &'static str = "List the directory's categories with their ids, descriptions, advertised tool counts and the number of tools actually listed in each. Use the ids with catalog_search or catalog_browse_category.";

    pub fn execute(store: &CatalogStore) -> CallToolResult {
        let categories: Vec<_> = store
            .list_categories()
            .iter()
            .map(|category| CategoryEntry {
                category,
                listed_tools: store.tools_in_category(&category.id).len(),
            })
            .collect();
        info!("Listing {} categories", categories.len());

        let text = categories
            .iter()
            .map(|e| {
                format!(
                    "{} {} ({}) - {} [{} tools, {} listed here]",
                    e.category.icon,
                    e.category.name,
                    e.category.id,
                    e.category.description,
                    e.category.tool_count,
                    e.listed_tools
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        structured_result(text, &CategoryListing { categories })
    }

    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        store: Arc<CatalogStore>,
    ) -> Result<serde_json::Value, ToolError> {
        Ok(http_response(Self::execute(&store)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CatalogListCategoriesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("AI tool categories".into()),
        }
    }

    pub fn create_route<S>(store: Arc<CatalogStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let store = store.clone();
            async move { Ok(Self::execute(&store)) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_categories_in_catalog_order() {
        let store = CatalogStore::seed().unwrap();
        let result = CatalogListCategoriesTool::execute(&store);
        let data = result.structured_content.unwrap();
        let categories = data["categories"].as_array().unwrap();

        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0]["id"], "image-generation");
        assert_eq!(categories[7]["id"], "analytics");
    }

    #[test]
    fn test_list_categories_counts_listed_tools() {
        let store = CatalogStore::seed().unwrap();
        let result = CatalogListCategoriesTool::execute(&store);
        let data = result.structured_content.unwrap();
        let categories = data["categories"].as_array().unwrap();

        let listed = |id: &str| {
            categories
                .iter()
                .find(|c| c["id"] == id)
                .and_then(|c| c["listedTools"].as_u64())
        };
        assert_eq!(listed("image-generation"), Some(1));
        assert_eq!(listed("writing"), Some(0));
        assert_eq!(listed("analytics"), Some(0));
        assert_eq!(categories[0]["toolCount"], 45);
    }
}
