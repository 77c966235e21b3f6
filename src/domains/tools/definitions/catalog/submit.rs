//! Tool submission definition.
//!
//! Checks a proposed listing against the catalog. Nothing is stored; the
//! caller gets back either the listing as it would appear or every problem
//! found with it.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::instrument;

use super::common::{error_result, structured_result};
use crate::domains::catalog::{CatalogError, CatalogStore, ToolSubmission};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

pub struct CatalogSubmitTool;

impl CatalogSubmitTool {
    pub const NAME: &'static str = "catalog_submit";

    pub const DESCRIPTION: &'static str = "Submit an AI tool for review. Requires name, website (http/https URL) and description; tagline, category id, pricing tier and logo URL are optional. Returns the proposed listing or the list of validation problems. Submissions are not added to the directory.";

    #[instrument(skip_all, fields(name = %submission.name))]
    pub fn execute(submission: &ToolSubmission, store: &CatalogStore) -> CallToolResult {
        match submission.validate(store) {
            Ok(accepted) => {
                let mut text = format!(
                    "Thanks! '{}' was received for review and would be listed as '{}'.",
                    accepted.name, accepted.id
                );
                if accepted.already_listed {
                    text.push_str(&format!(
                        " Note: a tool with id '{}' is already in the directory.",
                        accepted.id
                    ));
                }
                structured_result(text, &accepted)
            }
            Err(CatalogError::InvalidSubmission(problems)) => {
                let list = problems
                    .iter()
                    .map(|p| format!("- {}", p))
                    .collect::<Vec<_>>()
                    .join("\n");
                error_result(&format!("Submission rejected:\n{}", list))
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<CatalogStore>,
    ) -> Result<serde_json::Value, ToolError> {
        let submission: ToolSubmission = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&submission, &store)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ToolSubmission>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Submit an AI tool".into()),
        }
    }

    pub fn create_route<S>(store: Arc<CatalogStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let submission: ToolSubmission =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&submission, &store))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_submit_accepted() {
        let store = CatalogStore::seed().unwrap();
        let submission = ToolSubmission {
            name: "Stable Audio".to_string(),
            website: "https://stableaudio.com".to_string(),
            description: "Music and sound effects from text prompts.".to_string(),
            category: "audio".to_string(),
            ..Default::default()
        };
        let result = CatalogSubmitTool::execute(&submission, &store);
        assert!(!result.is_error.unwrap_or(false));
        assert!(text(&result).contains("'stable-audio'"));
        let data = result.structured_content.as_ref().unwrap();
        assert_eq!(data["category_id"], "audio");
        assert_eq!(data["already_listed"], false);

        // The store is untouched.
        assert!(store.find_tool_by_id("stable-audio").is_err());
    }

    #[test]
    fn test_submit_rejected_lists_problems() {
        let store = CatalogStore::seed().unwrap();
        let submission = ToolSubmission {
            name: "Nameless".to_string(),
            website: "not a url".to_string(),
            ..Default::default()
        };
        let result = CatalogSubmitTool::execute(&submission, &store);
        assert!(result.is_error.unwrap_or(false));
        let text = text(&result);
        assert!(text.starts_with("Submission rejected:"));
        assert!(text.contains("- website 'not a url' must be an http(s) URL"));
        assert!(text.contains("- description is required"));
    }

    #[test]
    fn test_submit_duplicate_is_flagged() {
        let store = CatalogStore::seed().unwrap();
        let submission = ToolSubmission {
            name: "Midjourney".to_string(),
            website: "https://midjourney.com".to_string(),
            description: "Again.".to_string(),
            ..Default::default()
        };
        let result = CatalogSubmitTool::execute(&submission, &store);
        assert!(!result.is_error.unwrap_or(false));
        assert!(text(&result).contains("already in the directory"));
    }

    #[test]
    fn test_submit_empty_arguments_lists_every_missing_field() {
        let store = CatalogStore::seed().unwrap();
        let submission: ToolSubmission = serde_json::from_value(serde_json::json!({})).unwrap();
        let result = CatalogSubmitTool::execute(&submission, &store);
        assert!(result.is_error.unwrap_or(false));
        let text = text(&result);
        assert!(text.contains("- name is required"));
        assert!(text.contains("- website is required"));
        assert!(text.contains("- description is required"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_submit_without_fields_is_a_rejection() {
        let store = Arc::new(CatalogStore::seed().unwrap());
        let response = CatalogSubmitTool::http_handler(serde_json::json!({}), store).unwrap();
        assert_eq!(response["isError"], true);
        assert!(response["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("name is required"));
    }
}
