//! Search guide resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// How to query the directory (static Markdown).
pub struct SearchGuideResource;

impl ResourceDefinition for SearchGuideResource {
    const URI: &'static str = "catalog://guide";
    const NAME: &'static str = "Search Guide";
    const DESCRIPTION: &'static str = "How searching, filtering and sorting the directory works";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(GUIDE.to_string())
    }
}

const GUIDE: &str = r#"# Searching the AI Tool Directory

## Filters

Filters are applied in this order and all of them must pass:

1. **Category**: a category id, or `all` (the default). An unknown id
   matches nothing.
2. **Text**: case-insensitive substring match against the tool's name,
   tagline, description and any of its tags. Blank text matches everything.
3. **Pricing**: optional list of `Free`, `Freemium`, `Paid`, `Enterprise`.
4. **Tags**: optional list; a tool must carry at least one of them.

## Sort orders

- `newest` (default): latest launch date first
- `popular`: most reviews first
- `rating`: highest rating first
- `alphabetical`: by name, ignoring case and accents

Ties keep catalog order. Any other sort key is rejected.

## Tools

- `catalog_search`, `catalog_get_tool`, `catalog_list_categories`,
  `catalog_browse_category`, `catalog_featured`, `catalog_submit`

## Resources

- `catalog://categories`, `catalog://stats`, `catalog://guide`
- `catalog://tools/{id}`, `catalog://categories/{id}`
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_content() {
        match SearchGuideResource::content() {
            ResourceContent::Text(text) => {
                assert!(text.contains("# Searching the AI Tool Directory"));
                assert!(text.contains("`alphabetical`"));
            }
            _ => panic!("Expected Text content"),
        }
    }
}
