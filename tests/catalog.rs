use std::io::Write;

use ai_tool_directory::core::config::CatalogConfig;
use ai_tool_directory::domains::catalog::{
    CatalogError, CatalogStore, CategoryFilter, CategoryView, HomeView, PricingTier, QuerySpec,
    SortKey, Tool, query,
};
use tempfile::NamedTempFile;
use tokio_test::{assert_err, assert_ok};

fn store() -> CatalogStore {
    assert_ok!(CatalogStore::seed())
}

fn ids(tools: &[&Tool]) -> Vec<String> {
    tools.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn chatbots_by_rating() {
    let store = store();
    let spec = QuerySpec::new()
        .in_category(CategoryFilter::from_param(Some("chatbots")))
        .sorted_by(SortKey::Rating);
    assert_eq!(ids(&query(store.list_tools(), &spec)), vec!["chatgpt"]);
}

#[test]
fn voice_search_finds_elevenlabs() {
    let store = store();
    let spec = QuerySpec::new().with_text("voice").sorted_by(SortKey::Newest);
    let found = ids(&query(store.list_tools(), &spec));
    assert!(found.contains(&"elevenlabs".to_string()));
    assert!(!found.contains(&"github-copilot".to_string()));
}

#[test]
fn unknown_category_filter_is_empty_not_an_error() {
    let store = store();
    let spec = QuerySpec::new().in_category(CategoryFilter::from_param(Some("teleportation")));
    assert!(query(store.list_tools(), &spec).is_empty());

    let home = HomeView::build(&store, spec);
    assert!(home.is_empty());
}

#[test]
fn unknown_category_page_is_not_found() {
    let store = store();
    let err = assert_err!(CategoryView::build(&store, Some("teleportation"), SortKey::Newest));
    assert!(matches!(err, CatalogError::CategoryNotFound(ref id) if id == "teleportation"));
}

#[test]
fn unknown_tool_is_not_found() {
    let store = store();
    let err = assert_err!(store.find_tool_by_id("does-not-exist"));
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Tool not found: does-not-exist");
}

#[test]
fn unsupported_sort_key_is_rejected() {
    let err = assert_err!(SortKey::from_param(Some("trending")));
    assert!(matches!(err, CatalogError::InvalidSortKey(_)));
    assert_eq!(assert_ok!(SortKey::from_param(None)), SortKey::Newest);
}

#[test]
fn every_sort_key_orders_the_full_catalog() {
    let store = store();
    for key in SortKey::ALL {
        let sorted = query(store.list_tools(), &QuerySpec::new().sorted_by(key));
        assert_eq!(sorted.len(), store.list_tools().len(), "{key} dropped tools");

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            match key {
                SortKey::Newest => assert!(a.launch_date >= b.launch_date),
                SortKey::Popular => assert!(a.review_count >= b.review_count),
                SortKey::Rating => assert!(a.rating >= b.rating),
                SortKey::Alphabetical => {
                    assert!(a.name.to_lowercase() <= b.name.to_lowercase())
                }
            }
        }
    }
}

#[test]
fn equal_ratings_keep_catalog_order() {
    let store = store();
    let sorted = ids(&query(
        store.list_tools(),
        &QuerySpec::new().sorted_by(SortKey::Rating),
    ));
    // ChatGPT and ElevenLabs share a 4.7 rating; ChatGPT comes first in the catalog.
    let chatgpt = sorted.iter().position(|id| id == "chatgpt");
    let elevenlabs = sorted.iter().position(|id| id == "elevenlabs");
    assert!(chatgpt < elevenlabs);
}

#[test]
fn query_leaves_the_store_untouched() {
    let store = store();
    let before = ids(&store.list_tools().iter().collect::<Vec<_>>());
    let _ = query(
        store.list_tools(),
        &QuerySpec::new().sorted_by(SortKey::Alphabetical),
    );
    let after = ids(&store.list_tools().iter().collect::<Vec<_>>());
    assert_eq!(before, after);
}

#[test]
fn filters_combine() {
    let store = store();
    let spec = QuerySpec::new()
        .with_pricing(vec![PricingTier::Freemium])
        .with_tags(vec!["ai-assistant".to_string()])
        .sorted_by(SortKey::Popular);
    assert_eq!(
        ids(&query(store.list_tools(), &spec)),
        vec!["chatgpt", "notion-ai"]
    );
}

#[test]
fn featured_tools_in_catalog_order() {
    let store = store();
    assert_eq!(
        ids(&store.featured_tools()),
        vec!["midjourney", "chatgpt", "elevenlabs"]
    );
}

#[test]
fn load_from_configured_file() {
    let document = serde_json::json!({
        "categories": [{
            "id": "search",
            "name": "Search",
            "description": "Answer engines",
            "icon": "🔎",
            "colorGradient": "from-sky-500 to-blue-500",
            "toolCount": 12
        }],
        "tools": [{
            "id": "perplexity",
            "name": "Perplexity",
            "tagline": "Answers with sources",
            "description": "Conversational search with citations.",
            "logoUrl": "https://example.com/perplexity.png",
            "websiteUrl": "https://perplexity.ai",
            "categoryId": "search",
            "pricing": "Freemium",
            "launchDate": "2022-12-07",
            "rating": 4.6,
            "reviewCount": 640,
            "tags": ["search"]
        }]
    });

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", document).unwrap();

    let config = CatalogConfig {
        path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let store = assert_ok!(CatalogStore::load(&config));
    assert_eq!(store.list_categories().len(), 1);
    let tool = assert_ok!(store.find_tool_by_id("perplexity"));
    assert_eq!(assert_ok!(store.category_of(tool)).name, "Search");
}

#[test]
fn load_rejects_dangling_category_reference() {
    let document = serde_json::json!({
        "categories": [],
        "tools": [{
            "id": "orphan",
            "name": "Orphan",
            "tagline": "",
            "description": "",
            "logoUrl": "",
            "websiteUrl": "https://example.com",
            "categoryId": "nowhere",
            "pricing": "Free",
            "launchDate": "2024-01-01",
            "rating": 3.0,
            "reviewCount": 1
        }]
    });

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", document).unwrap();

    let err = assert_err!(CatalogStore::from_json_file(file.path()));
    assert!(matches!(err, CatalogError::InvalidCatalog(_)));
}
