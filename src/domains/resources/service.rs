//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests,
//! resolving dynamic resources and templated entry URIs against the catalog.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::definitions::{
    CatalogStatsResource, CategoriesResource, CategoryEntryTemplate, DynamicResourceProvider,
    EntryTemplate, ToolEntryTemplate,
};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::catalog::CatalogStore;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// The catalog dynamic resources are computed from.
    catalog: Arc<CatalogStore>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: BTreeMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content computed from the catalog.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    /// The category list.
    Categories,

    /// Aggregate counts over the catalog.
    CatalogStats,
}

impl ResourceService {
    /// Create a new ResourceService over the given catalog.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            catalog,
            resources: BTreeMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        service.register_from_registry();
        service.templates = get_all_resource_templates();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Exact URIs are looked up first, then the entry templates.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, *dynamic_type)?
                }
            },
            None => self.resolve_template(uri)?,
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::Categories => CategoriesResource::resolve(uri, &self.catalog),
            DynamicResourceType::CatalogStats => CatalogStatsResource::resolve(uri, &self.catalog),
        }
    }

    /// Resolve a URI that instantiates one of the entry templates.
    fn resolve_template(&self, uri: &str) -> Result<ResourceContents, ResourceError> {
        if let Some(id) = non_empty_id::<ToolEntryTemplate>(uri) {
            return ToolEntryTemplate::resolve(uri, id, &self.catalog);
        }
        if let Some(id) = non_empty_id::<CategoryEntryTemplate>(uri) {
            return CategoryEntryTemplate::resolve(uri, id, &self.catalog);
        }
        debug!("No resource or template matches {}", uri);
        Err(ResourceError::not_found(uri))
    }
}

fn non_empty_id<T: EntryTemplate>(uri: &str) -> Option<&str> {
    T::id_from_uri(uri).filter(|id| !id.is_empty() && !id.contains('/'))
}
