//! View models for the two listing pages.
//!
//! A view model is a plain value rebuilt from the store and the caller's
//! current state every time that state changes. Nothing here observes or
//! caches anything.

use serde::Serialize;

use super::error::CatalogError;
use super::model::{Category, Tool};
use super::query::{CategoryFilter, QuerySpec, SortKey, query};
use super::store::CatalogStore;

/// Number of category shortcuts shown above the home listing.
pub const HOME_CATEGORY_CHIPS: usize = 6;

/// The home page: featured strip, category shortcuts and the search listing.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView<'a> {
    pub spec: QuerySpec,
    pub featured: Vec<&'a Tool>,
    pub category_chips: Vec<&'a Category>,
    pub results: Vec<&'a Tool>,
    pub result_count: usize,
}

impl<'a> HomeView<'a> {
    pub fn build(store: &'a CatalogStore, spec: QuerySpec) -> Self {
        let results = query(store.list_tools(), &spec);
        Self {
            featured: store.featured_tools(),
            category_chips: store
                .list_categories()
                .iter()
                .take(HOME_CATEGORY_CHIPS)
                .collect(),
            result_count: results.len(),
            results,
            spec,
        }
    }

    /// Whether the listing should render its empty state.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// The category browsing page, for one category or for all of them.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView<'a> {
    /// The selected category; `None` on the all-categories page.
    pub category: Option<&'a Category>,
    /// Every category, for the sidebar.
    pub categories: &'a [Category],
    pub sort: SortKey,
    pub tools: Vec<&'a Tool>,
    pub tool_count: usize,
}

impl<'a> CategoryView<'a> {
    /// Build the page for `category_id`, or the all-categories page when `None`.
    ///
    /// An id that does not resolve is reported as
    /// [`CatalogError::CategoryNotFound`] so the caller can render its
    /// not-found page instead of an empty listing.
    pub fn build(
        store: &'a CatalogStore,
        category_id: Option<&str>,
        sort: SortKey,
    ) -> Result<Self, CatalogError> {
        let filter = CategoryFilter::from_param(category_id);
        let category = match &filter {
            CategoryFilter::All => None,
            CategoryFilter::Id(id) => Some(store.find_category_by_id(id)?),
        };

        let spec = QuerySpec::new().in_category(filter).sorted_by(sort);
        let tools = query(store.list_tools(), &spec);

        Ok(Self {
            category,
            categories: store.list_categories(),
            sort,
            tool_count: tools.len(),
            tools,
        })
    }
}
