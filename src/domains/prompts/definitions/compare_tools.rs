//! Tool comparison prompt definition.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::{PromptDefinition, arg, argument};
use crate::domains::catalog::{CatalogStore, Tool};
use crate::domains::prompts::error::PromptError;

/// Side-by-side comparison of two directory entries.
pub struct CompareToolsPrompt;

impl PromptDefinition for CompareToolsPrompt {
    const NAME: &'static str = "compare_tools";
    const DESCRIPTION: &'static str =
        "Compare two AI tools from the directory using their catalog entries";

    fn template() -> &'static str {
        r#"Compare these two AI tools and help me choose between them.

{{first_profile}}

{{second_profile}}

{{#if shared_category}}Both tools are listed under {{shared_category}}.{{else}}The tools are listed in different categories, so point out where their purposes overlap and where they don't.{{/if}}

Cover strengths, weaknesses, pricing and the kind of user each one suits best, then give a recommendation."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("first", "Id of the first tool, e.g. chatgpt", true),
            argument("second", "Id of the second tool, e.g. notion-ai", true),
        ]
    }

    fn context(
        arguments: &HashMap<String, String>,
        store: &CatalogStore,
    ) -> Result<HashMap<String, String>, PromptError> {
        let first = lookup(arguments, "first", store)?;
        let second = lookup(arguments, "second", store)?;

        if first.id == second.id {
            return Err(PromptError::invalid_argument(
                "second",
                "must name a different tool than 'first'",
            ));
        }

        let mut context = HashMap::new();
        context.insert("first_profile".to_string(), profile(first, store));
        context.insert("second_profile".to_string(), profile(second, store));
        if first.category_id == second.category_id {
            let name = store
                .category_of(first)
                .map_or_else(|_| first.category_id.clone(), |c| c.name.clone());
            context.insert("shared_category".to_string(), name);
        }
        Ok(context)
    }
}

fn lookup<'a>(
    arguments: &HashMap<String, String>,
    name: &str,
    store: &'a CatalogStore,
) -> Result<&'a Tool, PromptError> {
    let id = arg(arguments, name).ok_or_else(|| PromptError::missing_argument(name))?;
    store
        .find_tool_by_id(id)
        .map_err(|e| PromptError::invalid_argument(name, e.to_string()))
}

fn profile(tool: &Tool, store: &CatalogStore) -> String {
    let category = store
        .category_of(tool)
        .map_or(tool.category_id.as_str(), |c| c.name.as_str());
    let list = |items: &[String]| {
        if items.is_empty() {
            "none listed".to_string()
        } else {
            items.join("; ")
        }
    };

    format!(
        "## {name}\n{tagline}\n- Category: {category}\n- Pricing: {pricing}\n- Rating: {rating:.1}/5 ({reviews} reviews)\n- Features: {features}\n- Pros: {pros}\n- Cons: {cons}",
        name = tool.name,
        tagline = tool.tagline,
        category = category,
        pricing = tool.pricing,
        rating = tool.rating,
        reviews = tool.review_count,
        features = list(&tool.features),
        pros = list(&tool.pros),
        cons = list(&tool.cons),
    )
}
