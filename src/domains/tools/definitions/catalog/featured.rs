//! Featured tools definition.
//!
//! Returns the home page highlights: the featured strip and the category
//! shortcuts shown above the listing.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::common::{ToolSummary, format_listing, structured_result, summarize};
use crate::domains::catalog::{CatalogStore, Category, HomeView, QuerySpec};

#[cfg(feature = "http")]
use super::common::http_response;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CatalogFeaturedParams {}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedTools<'a> {
    pub featured: Vec<ToolSummary>,
    pub categories: Vec<&'a Category>,
}

pub struct CatalogFeaturedTool;

impl CatalogFeaturedTool {
    pub const NAME: &'static str = "catalog_featured";

    pub const DESCRIPTION: &'static str = "List the directory's featured AI tools, in catalog order, along with the popular categories highlighted on the home page.";

    pub fn execute(store: &CatalogStore) -> CallToolResult {
        let home = HomeView::build(store, QuerySpec::new());
        let featured = summarize(&home.featured, store);
        info!("Featured tools: {}", featured.len());

        let chips = home
            .category_chips
            .iter()
            .map(|c| format!("{} {}", c.icon, c.name))
            .collect::<Vec<_>>()
            .join(", ");
        let text = format!(
            "Featured tools:\n{}\n\nPopular categories: {}",
            format_listing(&featured),
            chips
        );

        structured_result(
            text,
            &FeaturedTools {
                featured,
                categories: home.category_chips,
            },
        )
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
            input_schema: cached_schema_for_type::<CatalogFeaturedParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Featured AI tools".into()),
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
