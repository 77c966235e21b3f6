//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the small template
//! language prompts are written in.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE: &str = "{{else}}";
const END_IF: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given variables.
    ///
    /// - `{{variable}}` is replaced with the value of `variable`
    /// - `{{#if variable}}content{{/if}}` includes content only if variable is set
    /// - `{{#if variable}}content{{else}}alternative{{/if}}` with else support
    ///
    /// Conditionals do not nest. Placeholders without a value render as nothing.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = process_conditionals(&self.template, variables)?;

        for (key, value) in variables {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        Ok(clean_unmatched_placeholders(&result))
    }
}

fn is_set(variables: &HashMap<String, String>, name: &str) -> bool {
    variables.get(name).is_some_and(|v| !v.trim().is_empty())
}

fn process_conditionals(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut result = template.to_string();

    while let Some(if_start) = result.find(IF_OPEN) {
        let var_end = result[if_start..]
            .find("}}")
            .map(|pos| if_start + pos)
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let var_name = result[if_start + IF_OPEN.len()..var_end].trim();

        let endif_pos = result[var_end..]
            .find(END_IF)
            .map(|pos| var_end + pos)
            .ok_or_else(|| PromptError::template(format!("Missing {{{{/if}}}} for '{}'", var_name)))?;

        let block = &result[var_end + 2..endif_pos];
        let (when_set, otherwise) = match block.find(ELSE) {
            Some(else_pos) => (&block[..else_pos], &block[else_pos + ELSE.len()..]),
            None => (block, ""),
        };
        let replacement = if is_set(variables, var_name) {
            when_set
        } else {
            otherwise
        };

        result = format!(
            "{}{}{}",
            &result[..if_start],
            replacement,
            &result[endif_pos + END_IF.len()..]
        );
    }

    Ok(result)
}

fn clean_unmatched_placeholders(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start..].find("}}") else {
            break;
        };
        let placeholder = &rest[start..start + len + 2];
        result.push_str(&rest[..start]);
        if placeholder.contains('#') || placeholder.contains('/') {
            result.push_str(placeholder);
        }
        rest = &rest[start + len + 2..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn render(template: &str, variables: &[(&str, &str)]) -> Result<String, PromptError> {
        PromptTemplate::new("test", None, vec![], template).render(&vars(variables))
    }

    #[test]
    fn test_simple_substitution() {
        assert_eq!(
            render("Compare {{first}} with {{second}}.", &[("first", "ChatGPT"), ("second", "Notion AI")])
                .unwrap(),
            "Compare ChatGPT with Notion AI."
        );
    }

    #[test]
    fn test_conditional_with_value() {
        let result = render("Tools{{#if category}} in {{category}}{{/if}}:", &[("category", "Audio")]);
        assert_eq!(result.unwrap(), "Tools in Audio:");
    }

    #[test]
    fn test_conditional_blank_value_counts_as_unset() {
        let result = render("Tools{{#if category}} in {{category}}{{/if}}:", &[("category", "  ")]);
        assert_eq!(result.unwrap(), "Tools:");
    }

    #[test]
    fn test_conditional_with_else() {
        let result = render("{{#if same}}Same category{{else}}Different categories{{/if}}.", &[]);
        assert_eq!(result.unwrap(), "Different categories.");
    }

    #[test]
    fn test_multiple_conditionals() {
        let result = render("{{#if a}}A{{/if}}-{{#if b}}B{{else}}b{{/if}}", &[("a", "1")]);
        assert_eq!(result.unwrap(), "A-b");
    }

    #[test]
    fn test_unmatched_placeholders_are_removed() {
        assert_eq!(render("Need: {{need}}.", &[]).unwrap(), "Need: .");
    }

    #[test]
    fn test_missing_endif_is_an_error() {
        let err = render("{{#if need}}dangling", &[("need", "x")]).unwrap_err();
        assert!(matches!(err, PromptError::TemplateError(_)));
    }
}
