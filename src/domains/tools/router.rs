//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::domains::catalog::CatalogStore;

use super::definitions::{
    CatalogBrowseCategoryTool, CatalogFeaturedTool, CatalogGetToolTool, CatalogListCategoriesTool,
    CatalogSearchTool, CatalogSubmitTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(catalog: Arc<CatalogStore>, config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CatalogSearchTool::create_route(catalog.clone(), config))
        .with_route(CatalogGetToolTool::create_route(catalog.clone()))
        .with_route(CatalogListCategoriesTool::create_route(catalog.clone()))
        .with_route(CatalogBrowseCategoryTool::create_route(catalog.clone()))
        .with_route(CatalogFeaturedTool::create_route(catalog.clone()))
        .with_route(CatalogSubmitTool::create_route(catalog))
}
