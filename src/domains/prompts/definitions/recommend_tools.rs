//! Tool recommendation prompt definition.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::{PromptDefinition, arg, argument};
use crate::domains::catalog::{CatalogStore, CategoryFilter, QuerySpec, SortKey, Tool, query};
use crate::domains::prompts::error::PromptError;

/// Ask for a recommendation among the directory's tools.
pub struct RecommendToolsPrompt;

impl PromptDefinition for RecommendToolsPrompt {
    const NAME: &'static str = "recommend_tools";
    const DESCRIPTION: &'static str =
        "Recommend AI tools from the directory for a described need, optionally within one category";

    fn template() -> &'static str {
        r#"I'm looking for an AI tool for the following need:

{{need}}

{{#if category_name}}Only consider tools in the {{category_name}} category.
{{/if}}These are the candidate tools from the directory, best rated first:

{{candidates}}

Recommend the one or two tools that fit best. Explain the choice using their features, pricing, pros and cons, and say so plainly if none of them fit."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("need", "What the tool should help with", true),
            argument("category", "Category id to restrict candidates to", false),
        ]
    }

    fn context(
        arguments: &HashMap<String, String>,
        store: &CatalogStore,
    ) -> Result<HashMap<String, String>, PromptError> {
        let mut context = HashMap::new();

        let filter = CategoryFilter::from_param(arg(arguments, "category"));
        if let CategoryFilter::Id(id) = &filter {
            let category = store
                .find_category_by_id(id)
                .map_err(|e| PromptError::invalid_argument("category", e.to_string()))?;
            context.insert("category_name".to_string(), category.name.clone());
        }

        let spec = QuerySpec::new().in_category(filter).sorted_by(SortKey::Rating);
        let candidates = query(store.list_tools(), &spec);
        let listing = if candidates.is_empty() {
            "(no tools are listed in this category yet)".to_string()
        } else {
            candidates
                .iter()
                .map(|tool| candidate_line(tool))
                .collect::<Vec<_>>()
                .join("\n")
        };
        context.insert("candidates".to_string(), listing);

        Ok(context)
    }
}

fn candidate_line(tool: &Tool) -> String {
    format!(
        "- {} ({}): {}. {} pricing, rated {:.1}/5 by {} reviewers. Features: {}.",
        tool.name,
        tool.id,
        tool.tagline,
        tool.pricing,
        tool.rating,
        tool.review_count,
        tool.features.join(", ")
    )
}
