//! AI Tool Directory
//!
//! A catalog of AI tools with a query engine for searching, filtering and
//! sorting it, served over the Model Context Protocol (MCP).
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server and its transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: Tool and category records, the read-only store and the query engine
//!   - **tools**: MCP tools that search and browse the catalog
//!   - **resources**: Catalog documents readable by clients
//!   - **prompts**: Prompt templates that embed catalog facts
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ai_tool_directory::core::{Config, McpServer};
//! use ai_tool_directory::domains::catalog::{CatalogStore, QuerySpec, SortKey, query};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let catalog = Arc::new(CatalogStore::load(&config.catalog)?);
//!
//!     let spec = QuerySpec::new().with_text("voice").sorted_by(SortKey::Rating);
//!     for tool in query(catalog.list_tools(), &spec) {
//!         println!("{} - {}", tool.name, tool.tagline);
//!     }
//!
//!     let server = McpServer::new(config, catalog);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
