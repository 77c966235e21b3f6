//! Catalog domain module.
//!
//! This module owns the directory's data and the logic that turns it into
//! listings. It performs no I/O after load and is shared by the tools,
//! resources and prompts domains through an `Arc<CatalogStore>`.
//!
//! ## Architecture
//!
//! - `model.rs` - Category, Tool and PricingTier records
//! - `store.rs` - Read-only store with id lookup and load-time validation
//! - `query.rs` - Query engine (category, text, pricing and tag filters, sorting)
//! - `collation.rs` - Locale-aware name ordering
//! - `view.rs` - Home and category page view models
//! - `submission.rs` - Validation of proposed tools
//! - `seed.json` - Bundled catalog

mod collation;
mod error;
pub mod model;
pub mod query;
mod store;
mod submission;
pub mod view;

pub use collation::{collation_key, compare_names};
pub use error::CatalogError;
pub use model::{Category, PricingTier, Tool};
pub use query::{ALL_CATEGORIES, CategoryFilter, QuerySpec, SortKey, query};
pub use store::{CatalogDocument, CatalogStore};
pub use submission::{AcceptedSubmission, ToolSubmission};
pub use view::{CategoryView, HomeView};
