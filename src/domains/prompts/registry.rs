//! Prompt Registry - central registration of all prompts.
//!
//! This module provides dynamic prompt registration without modifying service.rs.
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use std::collections::HashMap;

use super::definitions::{CompareToolsPrompt, PromptDefinition, RecommendToolsPrompt};
use super::error::PromptError;
use super::templates::PromptTemplate;
use crate::domains::catalog::CatalogStore;

/// Computes the catalog-derived variables of a prompt.
pub type ContextProvider =
    fn(&HashMap<String, String>, &CatalogStore) -> Result<HashMap<String, String>, PromptError>;

/// A registered prompt: its template and the provider of its catalog facts.
#[derive(Clone)]
pub struct RegisteredPrompt {
    pub template: PromptTemplate,
    pub context: ContextProvider,
}

/// Build a RegisteredPrompt from a PromptDefinition.
fn build_prompt<P: PromptDefinition>() -> RegisteredPrompt {
    RegisteredPrompt {
        template: PromptTemplate {
            name: P::NAME.to_string(),
            description: Some(P::DESCRIPTION.to_string()),
            arguments: P::arguments(),
            template: P::template().to_string(),
        },
        context: P::context,
    }
}

/// Get all registered prompts.
///
/// This is the central place where all prompts are registered.
/// When adding a new prompt, add it here.
pub fn get_all_prompts() -> Vec<RegisteredPrompt> {
    vec![
        build_prompt::<RecommendToolsPrompt>(),
        build_prompt::<CompareToolsPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![RecommendToolsPrompt::NAME, CompareToolsPrompt::NAME]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 2);

        let names: Vec<_> = prompts.iter().map(|p| p.template.name.as_str()).collect();
        assert!(names.contains(&"recommend_tools"));
        assert!(names.contains(&"compare_tools"));
    }

    #[test]
    fn test_prompt_names_match_registry() {
        let names = prompt_names();
        let prompts = get_all_prompts();
        assert_eq!(names.len(), prompts.len());
        for prompt in &prompts {
            assert!(names.contains(&prompt.template.name.as_str()));
        }
    }
}
