//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - Content provider
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod catalog_stats;
mod categories;
mod entries;
mod guide;

pub use catalog_stats::{CatalogStats, CatalogStatsResource};
pub use categories::CategoriesResource;
pub use entries::{CategoryEntryTemplate, EntryTemplate, ToolEntryTemplate};
pub use guide::SearchGuideResource;

use rmcp::model::ResourceContents;

use super::error::ResourceError;
use super::service::ResourceContent;
use crate::domains::catalog::CatalogStore;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for resources whose content is computed from the catalog on read.
pub trait DynamicResourceProvider {
    /// Resolve the dynamic content.
    fn resolve(uri: &str, store: &CatalogStore) -> Result<ResourceContents, ResourceError>;
}

/// Pretty-print a value as the text of a JSON resource.
pub(crate) fn json_contents<T: serde::Serialize>(
    value: &T,
    uri: &str,
) -> Result<ResourceContents, ResourceError> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| ResourceError::internal(e.to_string()))?;
    Ok(ResourceContents::text(text, uri))
}
