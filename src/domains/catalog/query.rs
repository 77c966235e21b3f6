//! Query engine: filter and sort the catalog for a listing.
//!
//! [`query`] is a pure function of the tool list and a [`QuerySpec`]. It
//! never mutates its input: matching tools are collected as references into
//! a fresh vector, which is then stably sorted, so ties keep catalog order
//! and the store's canonical order is untouched between calls.
//!
//! Filters run in a fixed order: category, text, pricing, tags. The sort is
//! applied last.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::collation::compare_names;
use super::error::CatalogError;
use super::model::{PricingTier, Tool};

/// Wire value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Ordering applied to a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent launch date first.
    #[default]
    Newest,
    /// Most reviews first.
    Popular,
    /// Highest rating first.
    Rating,
    /// By name, A to Z.
    Alphabetical,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Popular,
        SortKey::Rating,
        SortKey::Alphabetical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::Alphabetical => "alphabetical",
        }
    }

    /// Parse an optional wire value; absence selects the default ordering.
    pub fn from_param(value: Option<&str>) -> Result<Self, CatalogError> {
        match value {
            Some(v) => v.parse(),
            None => Ok(Self::default()),
        }
    }

    fn compare(&self, a: &Tool, b: &Tool) -> Ordering {
        match self {
            Self::Newest => b.launch_date.cmp(&a.launch_date),
            Self::Popular => b.review_count.cmp(&a.review_count),
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Alphabetical => compare_names(&a.name, &b.name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    /// Only the four exact wire names are accepted; anything else is a caller bug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::invalid_sort_key(s))
    }
}

/// Which category a listing is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(String),
}

impl CategoryFilter {
    /// Interpret a route or tool parameter: missing, empty or `"all"` means every category.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_CATEGORIES) => Self::All,
            Some(id) => Self::Id(id.to_string()),
        }
    }

    pub fn matches(&self, tool: &Tool) -> bool {
        match self {
            Self::All => true,
            Self::Id(id) => tool.category_id == *id,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Id(id) => id,
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The filter and sort state a listing is computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuerySpec {
    /// Free text matched against name, tagline, description and tags.
    pub text: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
    /// Allowed pricing tiers; empty means any tier.
    pub pricing: Vec<PricingTier>,
    /// Tags of which a tool must carry at least one; empty means any tags.
    pub tags: Vec<String>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn in_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_pricing(mut self, pricing: Vec<PricingTier>) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// The search text with surrounding whitespace removed, if any remains.
    pub fn effective_text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Whether `tool` matches an already case-folded, non-empty needle.
pub fn matches_text(tool: &Tool, folded_needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(folded_needle);

    contains(&tool.name)
        || contains(&tool.tagline)
        || contains(&tool.description)
        || tool.tags.iter().any(|tag| contains(tag))
}

/// Compute the ordered listing for `spec`.
pub fn query<'a>(tools: &'a [Tool], spec: &QuerySpec) -> Vec<&'a Tool> {
    let folded_text = spec.effective_text().map(str::to_lowercase);

    let mut results: Vec<&Tool> = tools
        .iter()
        .filter(|tool| spec.category.matches(tool))
        .filter(|tool| match &folded_text {
            Some(needle) => matches_text(tool, needle),
            None => true,
        })
        .filter(|tool| spec.pricing.is_empty() || spec.pricing.contains(&tool.pricing))
        .filter(|tool| spec.tags.is_empty() || spec.tags.iter().any(|tag| tool.has_tag(tag)))
        .collect();

    sort_tools(&mut results, spec.sort);
    results
}

/// Stable sort of a listing by `key`.
pub fn sort_tools(tools: &mut [&Tool], key: SortKey) {
    tools.sort_by(|a, b| key.compare(a, b));
}
