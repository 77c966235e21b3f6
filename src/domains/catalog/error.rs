//! Catalog-specific error types.

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No tool with the given id exists.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// No category with the given id exists.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// A sort key outside the supported set reached the query engine.
    #[error("Invalid sort key '{0}': expected one of newest, popular, rating, alphabetical")]
    InvalidSortKey(String),

    /// A pricing tier outside the supported set was supplied.
    #[error("Invalid pricing tier '{0}': expected one of Free, Freemium, Paid, Enterprise")]
    InvalidPricingTier(String),

    /// A tool submission failed validation.
    #[error("Invalid submission: {}", .0.join("; "))]
    InvalidSubmission(Vec<String>),

    /// A loaded catalog violates one of its invariants.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// I/O error while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a new "tool not found" error.
    pub fn tool_not_found(id: impl Into<String>) -> Self {
        Self::ToolNotFound(id.into())
    }

    /// Create a new "category not found" error.
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::CategoryNotFound(id.into())
    }

    /// Create a new "invalid sort key" error.
    pub fn invalid_sort_key(key: impl Into<String>) -> Self {
        Self::InvalidSortKey(key.into())
    }

    /// Create a new "invalid pricing tier" error.
    pub fn invalid_pricing_tier(tier: impl Into<String>) -> Self {
        Self::InvalidPricingTier(tier.into())
    }

    /// Create a new "invalid catalog" error.
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog(msg.into())
    }

    /// Whether this error is a lookup miss rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ToolNotFound(_) | Self::CategoryNotFound(_))
    }
}
