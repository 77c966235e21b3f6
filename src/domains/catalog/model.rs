//! Catalog records: categories, tools and pricing tiers.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CatalogError;

/// A browsable category of tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique slug, e.g. `image-generation`.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Emoji shown next to the category name.
    pub icon: String,
    /// Gradient classes used by the category tile, e.g. `from-purple-500 to-pink-500`.
    pub color_gradient: String,
    /// Curated headline count shown on the category tile.
    ///
    /// This is marketing copy and is not derived from the tools in the catalog;
    /// see [`CatalogStore::tools_in_category`](super::CatalogStore::tools_in_category)
    /// for the live count.
    pub tool_count: u32,
}

/// How a tool is monetised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PricingTier {
    Free,
    Freemium,
    Paid,
    Enterprise,
}

impl PricingTier {
    pub const ALL: [PricingTier; 4] = [
        PricingTier::Free,
        PricingTier::Freemium,
        PricingTier::Paid,
        PricingTier::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingTier {
    type Err = CatalogError;

    /// Parse a tier name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::invalid_pricing_tier(s))
    }
}

/// A single AI tool listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique slug; the sole lookup key for detail views.
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub logo_url: String,
    pub website_url: String,
    /// Id of the owning [`Category`]; always resolves in a loaded store.
    pub category_id: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    pub pricing: PricingTier,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub screenshot_urls: Vec<String>,
    pub launch_date: NaiveDate,
    /// Average rating in `[0, 5]`.
    pub rating: f32,
    pub review_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Tool {
    /// Whether the tool carries `tag`, compared case-insensitively.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Whether `id` is a non-empty slug of lowercase ASCII letters, digits and dashes.
pub fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Turn a display name into a slug, e.g. `"Runway ML"` -> `"runway-ml"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
