//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - Template string
//! - The catalog facts it embeds
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod compare_tools;
mod recommend_tools;

pub use compare_tools::CompareToolsPrompt;
pub use recommend_tools::RecommendToolsPrompt;

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;
use crate::domains::catalog::CatalogStore;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Template variables computed from the catalog for these arguments.
    ///
    /// Required arguments are present and non-blank when this is called.
    fn context(
        arguments: &HashMap<String, String>,
        store: &CatalogStore,
    ) -> Result<HashMap<String, String>, PromptError>;
}

fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(required),
    }
}

/// Trimmed value of an argument, if present and non-blank.
fn arg<'a>(arguments: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    arguments
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}
