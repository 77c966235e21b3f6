//! Tools domain module.
//!
//! Tools are the callable face of the catalog: each one runs the query
//! engine or a store lookup and returns a text summary together with
//! structured JSON.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/catalog/` (e.g., `my_tool.rs`)
//! 2. Define params, execute(), to_tool(), create_route() and http_handler()
//! 3. Export in `definitions/catalog/mod.rs` and `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
