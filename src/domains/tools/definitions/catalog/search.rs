//! Catalog search tool definition.
//!
//! Runs the query engine with a free-text / category / sort specification,
//! the same listing the directory's home page shows.

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
    ToolSummary, format_listing, invalid_params, parse_pricing, structured_result, summarize,
};
use crate::core::config::{Config, clamp_limit};
use crate::domains::catalog::{
    CatalogError, CatalogStore, CategoryFilter, QuerySpec, SortKey, query,
};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the catalog search tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CatalogSearchParams {
    /// Free text matched (case-insensitively) against name, tagline, description and tags.
    #[schemars(description = "Search text; empty returns every tool")]
    #[serde(default)]
    pub query: String,

    /// Category id to restrict to, or "all".
    #[schemars(description = "Category id (see catalog_list_categories) or 'all' (default)")]
    #[serde(default)]
    pub category: Option<String>,

    /// Ordering of the results.
    #[schemars(description = "Sort order: 'newest' (default), 'popular', 'rating' or 'alphabetical'")]
    #[serde(default)]
    pub sort_by: Option<String>,

    /// Pricing tiers to keep.
    #[schemars(description = "Optional pricing tiers to keep: Free, Freemium, Paid, Enterprise")]
    #[serde(default)]
    pub pricing: Vec<String>,

    /// Tags of which a tool must carry at least one.
    #[schemars(description = "Optional tags; a tool must carry at least one of them")]
    #[serde(default)]
    pub tags: Vec<String>,

    /// Maximum number of results to return.
    #[schemars(description = "Maximum number of results (default from server config, max: 100)")]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Structured output for a search.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSearchResult {
    pub query: QuerySpec,
    /// Number of matching tools before the limit was applied.
    pub total_count: usize,
    pub results: Vec<ToolSummary>,
}

impl CatalogSearchParams {
    /// Build the engine's query from wire parameters, rejecting unknown sort keys and tiers.
    pub fn to_spec(&self) -> Result<QuerySpec, CatalogError> {
        Ok(QuerySpec::new()
            .with_text(self.query.clone())
            .in_category(CategoryFilter::from_param(self.category.as_deref()))
            .sorted_by(SortKey::from_param(self.sort_by.as_deref())?)
            .with_pricing(parse_pricing(&self.pricing)?)
            .with_tags(self.tags.clone()))
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Catalog search tool - filtered, sorted listing of tools.
pub struct CatalogSearchTool;

impl CatalogSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "catalog_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the AI tool directory. Filters by free text (name, tagline, description, tags), category, pricing tier and tags, then sorts by newest, popular, rating or alphabetical. An empty result is a valid answer.";

    /// Execute the tool logic.
    ///
    /// Returns `Err` only for malformed input (unknown sort key or pricing tier).
    #[instrument(skip_all, fields(query = %params.query))]
    pub fn execute(
        params: &CatalogSearchParams,
        store: &CatalogStore,
        config: &Config,
    ) -> Result<CallToolResult, CatalogError> {
        let spec = params.to_spec()?;
        let limit = clamp_limit(params.limit.unwrap_or(config.catalog.default_limit));

        info!(
            "Catalog search: text={:?} category={} sort={}",
            spec.text,
            spec.category.as_str(),
            spec.sort
        );

        let matches = query(store.list_tools(), &spec);
        let total_count = matches.len();
        let shown: Vec<_> = matches.into_iter().take(limit).collect();
        let results = summarize(&shown, store);

        let summary = if results.is_empty() {
            "No tools match this search. Try a broader query or another category.".to_string()
        } else if results.len() < total_count {
            format!(
                "Showing {} of {} tool(s), sorted by {}:\n{}",
                results.len(),
                total_count,
                spec.sort,
                format_listing(&results)
            )
        } else {
            format!(
                "Found {} tool(s), sorted by {}:\n{}",
                total_count,
                spec.sort,
                format_listing(&results)
            )
        };

        let data = CatalogSearchResult {
            query: spec,
            total_count,
            results,
        };
        Ok(structured_result(summary, &data))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<CatalogStore>,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: CatalogSearchParams = parse_arguments(arguments)?;
        info!("Catalog search tool (HTTP) called");

        let result = Self::execute(&params, &store, &config)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CatalogSearchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Search AI tools".into()),
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(store: Arc<CatalogStore>, config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            let config = config.clone();
            async move {
                let params: CatalogSearchParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&params, &store, &config).map_err(invalid_params)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
