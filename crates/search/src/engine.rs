//! Search/filter engine: category filter, match test, relevance ranking.

use crate::item::Searchable;
use crate::query::SearchQuery;
use crate::relevance::Normalized;
use crate::SearchResult;

/// Collections at least this large are scored on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 2048;

impl Normalized {
    /// Exact mode tightens name and category to equality; description is a
    /// substring test in both modes.
    fn matches(&self, term: &str, exact_match: bool) -> bool {
        if exact_match {
            self.name == term || self.category == term || self.description.contains(term)
        } else {
            self.name.contains(term)
                || self.category.contains(term)
                || self.description.contains(term)
        }
    }
}

/// Whether an item passes the match test for a normalized, non-empty term.
///
/// The category filter is not applied here.
pub fn matches<T: Searchable + ?Sized>(item: &T, term: &str, exact_match: bool) -> bool {
    Normalized::of(item).matches(term, exact_match)
}

/// Search items and return them ranked by relevance.
///
/// A blank query returns the category-filtered items in input order without
/// ranking. Otherwise items are filtered by category and match mode, then
/// stably sorted by descending score, so equal scores keep input order.
pub fn search<'a, T>(items: &'a [T], query: &SearchQuery) -> Vec<&'a T>
where
    T: Searchable + Sync,
{
    search_scored(items, query)
        .into_iter()
        .map(|result| result.item)
        .collect()
}

/// Like [`search`], but keeps each item's score.
///
/// Items returned for a blank query carry a score of 0.
pub fn search_scored<'a, T>(items: &'a [T], query: &SearchQuery) -> Vec<SearchResult<&'a T>>
where
    T: Searchable + Sync,
{
    let Some(term) = query.normalized_term() else {
        return items
            .iter()
            .filter(|item| query.category.admits(item.category()))
            .map(|item| SearchResult { item, score: 0 })
            .collect();
    };

    let mut results = score_candidates(items, query, &term);
    // slice::sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

fn evaluate<'a, T: Searchable>(
    item: &'a T,
    query: &SearchQuery,
    term: &str,
) -> Option<SearchResult<&'a T>> {
    if !query.category.admits(item.category()) {
        return None;
    }

    let fields = Normalized::of(item);
    fields.matches(term, query.exact_match).then(|| SearchResult {
        item,
        score: fields.score(term),
    })
}

fn score_candidates<'a, T>(
    items: &'a [T],
    query: &SearchQuery,
    term: &str,
) -> Vec<SearchResult<&'a T>>
where
    T: Searchable + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if items.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            // collect keeps input order
            return items
                .par_iter()
                .filter_map(|item| evaluate(item, query, term))
                .collect();
        }
    }

    items
        .iter()
        .filter_map(|item| evaluate(item, query, term))
        .collect()
}
