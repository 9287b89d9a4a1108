//! Relevance-ranked search for sound-effect libraries.
//!
//! This crate provides:
//! - An additive relevance scorer over name, category and description
//! - A search/filter engine with category filtering and exact/fuzzy modes
//! - Typeahead suggestions as a prefix of the ranked results
//! - WASM bindings for browser usage (`wasm` feature)
//!
//! Everything here is pure: results borrow from the caller's collection and
//! nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use sfx_search::{search, suggest, SearchItem, SearchQuery};
//!
//! let items = vec![
//!     SearchItem::new(1, "Brainy", "Voices", ""),
//!     SearchItem::new(2, "Rainstorm", "Nature", ""),
//!     SearchItem::new(3, "Rain", "Nature", "Gentle rainfall ambience"),
//! ];
//!
//! let ranked = search(&items, &SearchQuery::new("rain"));
//! let names: Vec<&str> = ranked.iter().map(|i| i.name.as_str()).collect();
//! assert_eq!(names, ["Rain", "Rainstorm", "Brainy"]);
//!
//! assert_eq!(suggest(&items, "rai", 2).len(), 2);
//! assert!(suggest(&items, "  ", 5).is_empty());
//! ```

mod engine;
mod error;
mod item;
mod query;
mod relevance;
mod suggest;

#[cfg(feature = "wasm")]
mod wasm;

pub use engine::{matches, search, search_scored};
pub use error::{parse_items, Result, SearchError};
pub use item::{SearchItem, Searchable};
pub use query::{CategoryFilter, SearchQuery, ALL_CATEGORIES};
pub use relevance::{relevance_score, weights};
pub use suggest::{suggest, DEFAULT_SUGGESTION_LIMIT};

/// Search result with relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better, 0 when no query was given)
    pub score: u32,
}
