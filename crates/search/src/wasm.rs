//! WASM bindings for search utilities.
//!
//! Items cross the boundary as JSON arrays of `{id, name, category,
//! description?}` objects. Malformed input yields an empty result rather
//! than a JS exception.

use wasm_bindgen::prelude::*;

use crate::{parse_items, SearchItem, SearchQuery};

/// Score one item (JSON object) against a query.
///
/// The query is trimmed and lower-cased first; a blank query scores 0.
#[wasm_bindgen]
pub fn relevance(item_json: &str, query: &str) -> u32 {
    let Ok(item) = serde_json::from_str::<SearchItem>(item_json) else {
        return 0;
    };

    SearchQuery::new(query)
        .normalized_term()
        .map_or(0, |term| crate::relevance_score(&item, &term))
}

/// Search items and return the ranked ids as a JSON array.
///
/// # Arguments
/// * `items_json` - JSON array of items
/// * `query` - Search text, blank for no ranking
/// * `category` - Category name, or `"All"` / empty for every category
/// * `exact_match` - Require exact name or category matches
#[wasm_bindgen]
pub fn search_sounds(items_json: &str, query: &str, category: &str, exact_match: bool) -> String {
    let Ok(items) = parse_items(items_json) else {
        return "[]".to_string();
    };

    let category = (!category.is_empty()).then_some(category);
    let query = SearchQuery::new(query)
        .in_category(category)
        .exact(exact_match);

    ids_json(&crate::search(&items, &query))
}

/// Suggest up to `limit` items for a partial query, as a JSON array of ids.
#[wasm_bindgen]
pub fn suggest_sounds(items_json: &str, partial: &str, limit: usize) -> String {
    let Ok(items) = parse_items(items_json) else {
        return "[]".to_string();
    };

    ids_json(&crate::suggest(&items, partial, limit))
}

fn ids_json(items: &[&SearchItem]) -> String {
    let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}
