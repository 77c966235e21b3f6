//! Tool submissions.
//!
//! Submissions are validated against the catalog and echoed back; they are
//! never added to the store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::CatalogError;
use super::model::{PricingTier, slugify};
use super::store::CatalogStore;

/// A tool proposed for the directory.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ToolSubmission {
    /// Tool name (required).
    #[serde(default)]
    pub name: String,

    /// Tool website, an http(s) URL (required).
    #[serde(default)]
    pub website: String,

    /// One-line pitch.
    #[serde(default)]
    pub tagline: String,

    /// Longer description (required).
    #[serde(default)]
    pub description: String,

    /// Category id from the catalog.
    #[serde(default)]
    pub category: String,

    /// Pricing model: Free, Freemium, Paid or Enterprise.
    #[serde(default)]
    pub pricing: String,

    /// Logo URL.
    #[serde(default)]
    pub logo: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedSubmission {
    /// Slug the tool would be listed under.
    pub id: String,
    pub name: String,
    pub website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Set when a tool with the same slug is already listed.
    pub already_listed: bool,
}

impl ToolSubmission {
    /// Validate the submission, collecting every problem rather than stopping at the first.
    pub fn validate(&self, store: &CatalogStore) -> Result<AcceptedSubmission, CatalogError> {
        let mut problems = Vec::new();

        let name = self.name.trim();
        let website = self.website.trim();
        let description = self.description.trim();

        if name.is_empty() {
            problems.push("name is required".to_string());
        }
        if website.is_empty() {
            problems.push("website is required".to_string());
        } else if !is_http_url(website) {
            problems.push(format!("website '{}' must be an http(s) URL", website));
        }
        if description.is_empty() {
            problems.push("description is required".to_string());
        }

        let logo = non_empty(&self.logo);
        if let Some(logo) = logo {
            if !is_http_url(logo) {
                problems.push(format!("logo '{}' must be an http(s) URL", logo));
            }
        }

        let category_id = non_empty(&self.category);
        if let Some(id) = category_id {
            if store.find_category_by_id(id).is_err() {
                problems.push(format!("unknown category '{}'", id));
            }
        }

        let pricing = match non_empty(&self.pricing).map(str::parse::<PricingTier>) {
            Some(Ok(tier)) => Some(tier),
            Some(Err(e)) => {
                problems.push(e.to_string());
                None
            }
            None => None,
        };

        let id = slugify(name);
        if !name.is_empty() && id.is_empty() {
            problems.push(format!("name '{}' has no letters or digits", name));
        }

        if !problems.is_empty() {
            debug!("Submission rejected: {:?}", problems);
            return Err(CatalogError::InvalidSubmission(problems));
        }

        let already_listed = store.find_tool_by_id(&id).is_ok();
        info!("Submission accepted for review: {}", id);

        Ok(AcceptedSubmission {
            id,
            name: name.to_string(),
            website: website.to_string(),
            tagline: non_empty(&self.tagline).map(str::to_string),
            description: description.to_string(),
            category_id: category_id.map(str::to_string),
            pricing,
            logo: logo.map(str::to_string),
            already_listed,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/') && !host.contains(char::is_whitespace))
}
