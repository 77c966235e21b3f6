//! Parameterized resources for single catalog entries.

use rmcp::model::ResourceContents;
use serde::Serialize;

use super::json_contents;
use crate::domains::catalog::{CatalogStore, Category, Tool};
use crate::domains::resources::error::ResourceError;

/// A resource template whose only parameter is an entry id at the end of the URI.
pub trait EntryTemplate {
    /// RFC 6570 template advertised to clients.
    const URI_TEMPLATE: &'static str;

    /// Everything before `{id}`.
    const PREFIX: &'static str;

    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    const MIME_TYPE: &'static str = "application/json";

    /// Resolve a concrete URI whose id has already been extracted.
    fn resolve(uri: &str, id: &str, store: &CatalogStore) -> Result<ResourceContents, ResourceError>;

    /// Extract the id from `uri`, or `None` if the URI is not an instance of this template.
    fn id_from_uri(uri: &str) -> Option<&str> {
        uri.strip_prefix(Self::PREFIX)
    }
}

/// `catalog://tools/{id}` - one tool with its category.
pub struct ToolEntryTemplate;

#[derive(Serialize)]
struct ToolEntry<'a> {
    tool: &'a Tool,
    category: Option<&'a Category>,
}

impl EntryTemplate for ToolEntryTemplate {
    const URI_TEMPLATE: &'static str = "catalog://tools/{id}";
    const PREFIX: &'static str = "catalog://tools/";
    const NAME: &'static str = "Tool";
    const DESCRIPTION: &'static str = "A single directory entry by tool id, e.g. catalog://tools/chatgpt";

    fn resolve(uri: &str, id: &str, store: &CatalogStore) -> Result<ResourceContents, ResourceError> {
        let tool = store
            .find_tool_by_id(id)
            .map_err(|_| ResourceError::not_found(uri))?;
        let entry = ToolEntry {
            tool,
            category: store.category_of(tool).ok(),
        };
        json_contents(&entry, uri)
    }
}

/// `catalog://categories/{id}` - one category with the tools filed under it.
pub struct CategoryEntryTemplate;

#[derive(Serialize)]
struct CategoryEntry<'a> {
    category: &'a Category,
    tools: Vec<&'a Tool>,
}

impl EntryTemplate for CategoryEntryTemplate {
    const URI_TEMPLATE: &'static str = "catalog://categories/{id}";
    const PREFIX: &'static str = "catalog://categories/";
    const NAME: &'static str = "Category";
    const DESCRIPTION: &'static str =
        "A category and its tools by category id, e.g. catalog://categories/audio";

    fn resolve(uri: &str, id: &str, store: &CatalogStore) -> Result<ResourceContents, ResourceError> {
        let category = store
            .find_category_by_id(id)
            .map_err(|_| ResourceError::not_found(uri))?;
        let entry = CategoryEntry {
            category,
            tools: store.tools_in_category(&category.id),
        };
        json_contents(&entry, uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(contents: ResourceContents) -> serde_json::Value {
        match contents {
            ResourceContents::TextResourceContents { text, .. } => {
                serde_json::from_str(&text).unwrap()
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[test]
    fn test_id_from_uri() {
        assert_eq!(
            ToolEntryTemplate::id_from_uri("catalog://tools/chatgpt"),
            Some("chatgpt")
        );
        assert_eq!(ToolEntryTemplate::id_from_uri("catalog://categories/audio"), None);
        assert_eq!(
            CategoryEntryTemplate::id_from_uri("catalog://categories/audio"),
            Some("audio")
        );
    }

    #[test]
    fn test_tool_entry_resolves() {
        let store = CatalogStore::seed().unwrap();
        let uri = "catalog://tools/runway-ml";
        let value = text(ToolEntryTemplate::resolve(uri, "runway-ml", &store).unwrap());
        assert_eq!(value["tool"]["name"], "Runway ML");
        assert_eq!(value["category"]["id"], "video");
    }

    #[test]
    fn test_category_entry_resolves() {
        let store = CatalogStore::seed().unwrap();
        let uri = "catalog://categories/chatbots";
        let value = text(CategoryEntryTemplate::resolve(uri, "chatbots", &store).unwrap());
        assert_eq!(value["category"]["name"], "Chatbots & AI Assistants");
        assert_eq!(value["tools"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_entries_are_not_found() {
        let store = CatalogStore::seed().unwrap();
        let err = ToolEntryTemplate::resolve("catalog://tools/nope", "nope", &store).unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
        let err = CategoryEntryTemplate::resolve("catalog://categories/nope", "nope", &store)
            .unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
    }
}
