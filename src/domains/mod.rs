//! Domains module containing business logic organized by bounded contexts.
//!
//! `catalog` holds the directory data and its query engine. The other
//! subdomains expose it over MCP as tools, resources and prompts.

pub mod catalog;
pub mod prompts;
pub mod resources;
pub mod tools;
