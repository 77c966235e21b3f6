//! Catalog statistics resource definition.

use rmcp::model::ResourceContents;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{DynamicResourceProvider, ResourceDefinition, json_contents};
use crate::domains::catalog::{CatalogStore, PricingTier};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Counts computed over the loaded catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub tools: usize,
    pub categories: usize,
    pub featured: usize,
    pub total_reviews: u64,
    pub average_rating: Option<f32>,
    pub newest_launch: Option<String>,
    pub by_pricing: BTreeMap<&'static str, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl CatalogStats {
    pub fn compute(store: &CatalogStore) -> Self {
        let tools = store.list_tools();

        let mut by_pricing: BTreeMap<_, _> =
            PricingTier::ALL.iter().map(|t| (t.as_str(), 0)).collect();
        let mut by_category: BTreeMap<_, _> = store
            .list_categories()
            .iter()
            .map(|c| (c.id.clone(), 0))
            .collect();
        for tool in tools {
            *by_pricing.entry(tool.pricing.as_str()).or_default() += 1;
            *by_category.entry(tool.category_id.clone()).or_default() += 1;
        }

        let average_rating = (!tools.is_empty())
            .then(|| tools.iter().map(|t| t.rating).sum::<f32>() / tools.len() as f32);

        Self {
            tools: tools.len(),
            categories: store.list_categories().len(),
            featured: store.featured_tools().len(),
            total_reviews: tools.iter().map(|t| u64::from(t.review_count)).sum(),
            average_rating,
            newest_launch: tools
                .iter()
                .map(|t| t.launch_date)
                .max()
                .map(|d| d.format("%Y-%m-%d").to_string()),
            by_pricing,
            by_category,
        }
    }
}

/// Live statistics about the directory.
pub struct CatalogStatsResource;

impl ResourceDefinition for CatalogStatsResource {
    const URI: &'static str = "catalog://stats";
    const NAME: &'static str = "Catalog Statistics";
    const DESCRIPTION: &'static str =
        "Tool, category and review counts for the directory, broken down by pricing and category";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::CatalogStats)
    }
}

impl DynamicResourceProvider for CatalogStatsResource {
    fn resolve(uri: &str, store: &CatalogStore) -> Result<ResourceContents, ResourceError> {
        json_contents(&CatalogStats::compute(store), uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_over_seed_catalog() {
        let store = CatalogStore::seed().unwrap();
        let stats = CatalogStats::compute(&store);

        assert_eq!(stats.tools, 6);
        assert_eq!(stats.categories, 8);
        assert_eq!(stats.featured, 3);
        assert_eq!(stats.newest_launch.as_deref(), Some("2023-02-22"));
        assert_eq!(stats.by_pricing["Paid"], 2);
        assert_eq!(stats.by_pricing["Enterprise"], 0);
        assert_eq!(stats.by_category["writing"], 0);
        assert_eq!(stats.by_category["code"], 1);
        assert_eq!(stats.by_category.values().sum::<usize>(), 6);
    }

    #[test]
    fn test_stats_empty_catalog() {
        let store = CatalogStore::new(Vec::new(), Vec::new()).unwrap();
        let stats = CatalogStats::compute(&store);
        assert_eq!(stats.tools, 0);
        assert!(stats.average_rating.is_none());
        assert!(stats.newest_launch.is_none());
    }
}
