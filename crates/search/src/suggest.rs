//! Typeahead suggestions.

use crate::engine::search;
use crate::item::Searchable;
use crate::query::SearchQuery;

/// Suggestion count used when the caller does not choose one.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Suggest items for a partially typed query.
///
/// Suggestions are the first `limit` results of a fuzzy search across all
/// categories. A blank `partial` yields no suggestions, unlike [`search`],
/// which returns everything for a blank query.
pub fn suggest<'a, T>(items: &'a [T], partial: &str, limit: usize) -> Vec<&'a T>
where
    T: Searchable + Sync,
{
    if partial.trim().is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut results = search(items, &SearchQuery::new(partial));
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::SearchItem;
    use proptest::prelude::*;

    fn items() -> Vec<SearchItem> {
        vec![
            SearchItem::new(1, "Button Click", "UI", "Clean button click sound for interfaces"),
            SearchItem::new(2, "Notification", "UI", "Standard notification alert tone"),
            SearchItem::new(3, "Rain", "Nature", "Gentle rainfall ambience"),
            SearchItem::new(4, "Rainstorm", "Nature", "Heavy rain with thunder"),
            SearchItem::new(5, "Brainy Beep", "UI", ""),
        ]
    }

    #[test]
    fn test_blank_partial_is_empty() {
        let items = items();
        assert!(suggest(&items, "", 5).is_empty());
        assert!(suggest(&items, " \t", 5).is_empty());
    }

    #[test]
    fn test_limit_truncates_ranked_results() {
        let items = items();
        let names: Vec<&str> = suggest(&items, "rai", 2)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["Rain", "Rainstorm"]);
    }

    #[test]
    fn test_fewer_matches_than_limit() {
        let items = items();
        assert_eq!(suggest(&items, "notif", 5).len(), 1);
    }

    #[test]
    fn test_zero_limit() {
        let items = items();
        assert!(suggest(&items, "rain", 0).is_empty());
    }

    #[test]
    fn test_ignores_category_and_exactness() {
        // "beep" only matches as a substring, which exact mode would reject
        let items = items();
        assert_eq!(suggest(&items, "beep", DEFAULT_SUGGESTION_LIMIT)[0].id, 5);
    }

    proptest! {
        #[test]
        fn prop_suggestions_prefix_search(partial in "[a-z]{1,3}", limit in 0usize..8) {
            let items = items();
            let suggestions = suggest(&items, &partial, limit);
            let full = search(&items, &SearchQuery::new(partial.as_str()));
            prop_assert!(suggestions.len() <= limit);
            prop_assert_eq!(suggestions.len(), full.len().min(limit));
            for (s, f) in suggestions.iter().zip(full.iter()) {
                prop_assert_eq!(s.id, f.id);
            }
        }
    }
}
