//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;
use crate::domains::catalog::CatalogStore;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{
    CatalogBrowseCategoryTool, CatalogFeaturedTool, CatalogGetToolTool, CatalogListCategoriesTool,
    CatalogSearchTool, CatalogSubmitTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Holds the shared catalog so HTTP calls can be dispatched without
/// going through the rmcp router.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub struct ToolRegistry {
    catalog: Arc<CatalogStore>,
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(catalog: Arc<CatalogStore>, config: Arc<Config>) -> Self {
        Self { catalog, config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CatalogSearchTool::NAME,
            CatalogGetToolTool::NAME,
            CatalogListCategoriesTool::NAME,
            CatalogBrowseCategoryTool::NAME,
            CatalogFeaturedTool::NAME,
            CatalogSubmitTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CatalogSearchTool::to_tool(),
            CatalogGetToolTool::to_tool(),
            CatalogListCategoriesTool::to_tool(),
            CatalogBrowseCategoryTool::to_tool(),
            CatalogFeaturedTool::to_tool(),
            CatalogSubmitTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let catalog = self.catalog.clone();
        match name {
            CatalogSearchTool::NAME => {
                CatalogSearchTool::http_handler(arguments, catalog, self.config.clone())
            }
            CatalogGetToolTool::NAME => CatalogGetToolTool::http_handler(arguments, catalog),
            CatalogListCategoriesTool::NAME => {
                CatalogListCategoriesTool::http_handler(arguments, catalog)
            }
            CatalogBrowseCategoryTool::NAME => {
                CatalogBrowseCategoryTool::http_handler(arguments, catalog)
            }
            CatalogFeaturedTool::NAME => CatalogFeaturedTool::http_handler(arguments, catalog),
            CatalogSubmitTool::NAME => CatalogSubmitTool::http_handler(arguments, catalog),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}
