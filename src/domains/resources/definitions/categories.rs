//! Category list resource definition.

use rmcp::model::ResourceContents;

use super::{DynamicResourceProvider, ResourceDefinition, json_contents};
use crate::domains::catalog::CatalogStore;
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Every category in catalog order, as JSON.
pub struct CategoriesResource;

impl ResourceDefinition for CategoriesResource {
    const URI: &'static str = "catalog://categories";
    const NAME: &'static str = "Categories";
    const DESCRIPTION: &'static str = "All categories of the AI tool directory";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Categories)
    }
}

impl DynamicResourceProvider for CategoriesResource {
    fn resolve(uri: &str, store: &CatalogStore) -> Result<ResourceContents, ResourceError> {
        json_contents(&store.list_categories(), uri)
    }
}
