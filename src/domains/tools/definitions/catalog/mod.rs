//! Catalog tools: search, detail, category browsing, featured listing and
//! submissions.

pub mod browse;
pub mod categories;
pub mod common;
pub mod detail;
pub mod featured;
pub mod search;
pub mod submit;

pub use browse::{CatalogBrowseCategoryParams, CatalogBrowseCategoryTool};
pub use categories::CatalogListCategoriesTool;
pub use detail::{CatalogGetToolParams, CatalogGetToolTool};
pub use featured::CatalogFeaturedTool;
pub use search::{CatalogSearchParams, CatalogSearchTool};
pub use submit::CatalogSubmitTool;
