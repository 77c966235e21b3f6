//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod catalog;

pub use catalog::{
    CatalogBrowseCategoryParams, CatalogBrowseCategoryTool, CatalogFeaturedTool,
    CatalogGetToolParams, CatalogGetToolTool, CatalogListCategoriesTool, CatalogSearchParams,
    CatalogSearchTool, CatalogSubmitTool,
};
