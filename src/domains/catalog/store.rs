//! Catalog store: the read-only source of truth for categories and tools.
//!
//! The store is built once at startup, either from the bundled seed catalog
//! or from a JSON file, and validated on the way in. After that it is only
//! ever read, so it is shared as `Arc<CatalogStore>` without locking.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

use super::error::CatalogError;
use super::model::{Category, Tool, is_slug};
use crate::core::config::CatalogConfig;

const SEED_CATALOG: &str = include_str!("seed.json");

/// On-disk catalog layout: `{ "categories": [...], "tools": [...] }`.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
    pub tools: Vec<Tool>,
}

/// Immutable collection of categories and tools with id lookup.
#[derive(Debug)]
pub struct CatalogStore {
    categories: Vec<Category>,
    tools: Vec<Tool>,
    category_index: HashMap<String, usize>,
    tool_index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Build a store, checking every catalog invariant.
    pub fn new(categories: Vec<Category>, tools: Vec<Tool>) -> Result<Self, CatalogError> {
        let category_index = index_by_id(categories.iter().map(|c| c.id.as_str()), "category")?;
        let tool_index = index_by_id(tools.iter().map(|t| t.id.as_str()), "tool")?;

        for tool in &tools {
            if !category_index.contains_key(&tool.category_id) {
                return Err(CatalogError::invalid_catalog(format!(
                    "tool '{}' references unknown category '{}'",
                    tool.id, tool.category_id
                )));
            }
            if !tool.rating.is_finite() || !(0.0..=5.0).contains(&tool.rating) {
                return Err(CatalogError::invalid_catalog(format!(
                    "tool '{}' has rating {} outside [0, 5]",
                    tool.id, tool.rating
                )));
            }
        }

        Ok(Self {
            categories,
            tools,
            category_index,
            tool_index,
        })
    }

    /// The catalog bundled with the binary.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json_str(SEED_CATALOG)
    }

    /// Parse and validate a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.categories, document.tools)
    }

    /// Read, parse and validate a catalog file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Load the catalog described by the configuration.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let store = match &config.path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Self::from_json_file(path)?
            }
            None => {
                info!("Loading bundled seed catalog");
                Self::seed()?
            }
        };

        info!(
            "Catalog ready: {} categories, {} tools",
            store.categories.len(),
            store.tools.len()
        );
        Ok(store)
    }

    /// All categories in curated order.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// All tools in catalog-definition order.
    pub fn list_tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn find_tool_by_id(&self, id: &str) -> Result<&Tool, CatalogError> {
        match self.tool_index.get(id) {
            Some(&idx) => Ok(&self.tools[idx]),
            None => {
                debug!("No tool with id '{}'", id);
                Err(CatalogError::tool_not_found(id))
            }
        }
    }

    pub fn find_category_by_id(&self, id: &str) -> Result<&Category, CatalogError> {
        match self.category_index.get(id) {
            Some(&idx) => Ok(&self.categories[idx]),
            None => {
                debug!("No category with id '{}'", id);
                Err(CatalogError::category_not_found(id))
            }
        }
    }

    /// Resolve the category a tool belongs to.
    pub fn category_of(&self, tool: &Tool) -> Result<&Category, CatalogError> {
        self.find_category_by_id(&tool.category_id)
    }

    /// Tools flagged as featured, in catalog order.
    pub fn featured_tools(&self) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.featured).collect()
    }

    /// Tools belonging to `category_id`, in catalog order.
    pub fn tools_in_category(&self, category_id: &str) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| t.category_id == category_id)
            .collect()
    }
}

/// Map ids to positions, rejecting malformed and duplicate ids.
fn index_by_id<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &str,
) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::new();
    let mut seen = HashSet::new();

    for (position, id) in ids.enumerate() {
        if !is_slug(id) {
            return Err(CatalogError::invalid_catalog(format!(
                "{} id '{}' is not a slug",
                kind, id
            )));
        }
        if !seen.insert(id) {
            return Err(CatalogError::invalid_catalog(format!(
                "duplicate {} id '{}'",
                kind, id
            )));
        }
        index.insert(id.to_string(), position);
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn seed() -> CatalogStore {
        CatalogStore::seed().unwrap()
    }

    fn minimal_document(tool_category: &str, rating: f32) -> String {
        serde_json::json!({
            "categories": [{
                "id": "audio",
                "name": "Audio & Speech",
                "description": "Voice synthesis",
                "icon": "🎵",
                "colorGradient": "from-indigo-500 to-purple-500",
                "toolCount": 1
            }],
            "tools": [{
                "id": "whisper",
                "name": "Whisper",
                "tagline": "Speech recognition",
                "description": "Transcribes audio",
                "logoUrl": "https://example.com/logo.png",
                "websiteUrl": "https://example.com",
                "categoryId": tool_category,
                "pricing": "Free",
                "launchDate": "2022-09-21",
                "rating": rating,
                "reviewCount": 10
            }]
        })
        .to_string()
    }

    #[test]
    fn test_seed_catalog_loads() {
        let store = seed();
        assert_eq!(store.list_categories().len(), 8);
        assert_eq!(store.list_tools().len(), 6);
        assert_eq!(store.list_categories()[0].id, "image-generation");
        assert_eq!(store.list_tools()[0].id, "midjourney");
    }

    #[test]
    fn test_find_tool_round_trip() {
        let store = seed();
        for tool in store.list_tools() {
            assert_eq!(store.find_tool_by_id(&tool.id).unwrap(), tool);
        }
    }

    #[test]
    fn test_find_tool_not_found() {
        let store = seed();
        let err = store.find_tool_by_id("nonexistent-id").unwrap_err();
        assert!(matches!(err, CatalogError::ToolNotFound(ref id) if id == "nonexistent-id"));
    }

    #[test]
    fn test_find_category() {
        let store = seed();
        assert_eq!(
            store.find_category_by_id("chatbots").unwrap().name,
            "Chatbots & AI Assistants"
        );
        assert!(store.find_category_by_id("robots").unwrap_err().is_not_found());
    }

    #[test]
    fn test_category_of_resolves_every_tool() {
        let store = seed();
        for tool in store.list_tools() {
            assert_eq!(store.category_of(tool).unwrap().id, tool.category_id);
        }
    }

    #[test]
    fn test_featured_tools_keep_catalog_order() {
        let store = seed();
        let ids: Vec<_> = store.featured_tools().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["midjourney", "chatgpt", "elevenlabs"]);
    }

    #[test]
    fn test_tools_in_category() {
        let store = seed();
        let audio = store.tools_in_category("audio");
        assert_eq!(audio.len(), 1);
        assert_eq!(audio[0].id, "elevenlabs");
        assert!(store.tools_in_category("writing").is_empty());
    }

    #[test]
    fn test_rejects_dangling_category() {
        let err = CatalogStore::from_json_str(&minimal_document("speech", 4.0)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCatalog(ref m) if m.contains("unknown category")));
    }

    #[test]
    fn test_rejects_rating_out_of_range() {
        let err = CatalogStore::from_json_str(&minimal_document("audio", 5.5)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCatalog(ref m) if m.contains("rating")));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let store = seed();
        let mut tools = store.list_tools().to_vec();
        tools.push(tools[0].clone());

        let err = CatalogStore::new(store.list_categories().to_vec(), tools).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCatalog(ref m) if m.contains("duplicate tool")));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = CatalogStore::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(minimal_document("audio", 4.2).as_bytes())
            .unwrap();

        let config = CatalogConfig {
            path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let store = CatalogStore::load(&config).unwrap();
        assert_eq!(store.list_tools().len(), 1);
        assert_eq!(store.find_tool_by_id("whisper").unwrap().name, "Whisper");
    }

    #[test]
    fn test_load_missing_file() {
        let config = CatalogConfig {
            path: Some("/nonexistent/catalog.json".into()),
            ..Default::default()
        };
        assert!(matches!(
            CatalogStore::load(&config),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn test_load_defaults_to_seed() {
        let store = CatalogStore::load(&CatalogConfig::default()).unwrap();
        assert_eq!(store.list_tools().len(), 6);
    }
}
