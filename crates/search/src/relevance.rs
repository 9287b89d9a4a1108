//! Relevance scoring for search results.
//!
//! Scores are additive. The name contributes from a single tier (exact,
//! prefix, or substring, highest wins); category, description and per-word
//! bonuses stack on top of it independently.

use crate::item::Searchable;

/// Point values for each kind of match.
pub mod weights {
    /// Full name equals the term
    pub const NAME_EXACT: u32 = 100;
    /// Name starts with the term
    pub const NAME_PREFIX: u32 = 75;
    /// Name contains the term
    pub const NAME_CONTAINS: u32 = 50;
    /// Category equals the term
    pub const CATEGORY_EXACT: u32 = 30;
    /// Category contains the term
    pub const CATEGORY_CONTAINS: u32 = 20;
    /// Description contains the term
    pub const DESCRIPTION_CONTAINS: u32 = 10;
    /// A whitespace-separated word of the name equals the term
    pub const WORD_EXACT: u32 = 15;
    /// A whitespace-separated word of the name starts with the term
    pub const WORD_PREFIX: u32 = 10;
}

/// Lower-cased copies of the searchable fields, computed once per item.
pub(crate) struct Normalized {
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) description: String,
}

impl Normalized {
    pub(crate) fn of<T: Searchable + ?Sized>(item: &T) -> Self {
        Self {
            name: item.name().to_lowercase(),
            category: item.category().to_lowercase(),
            description: item.description().to_lowercase(),
        }
    }

    pub(crate) fn score(&self, term: &str) -> u32 {
        use weights::*;

        let name_tier = if self.name == term {
            NAME_EXACT
        } else if self.name.starts_with(term) {
            NAME_PREFIX
        } else if self.name.contains(term) {
            NAME_CONTAINS
        } else {
            0
        };

        let category = if self.category == term {
            CATEGORY_EXACT
        } else if self.category.contains(term) {
            CATEGORY_CONTAINS
        } else {
            0
        };

        let description = if self.description.contains(term) {
            DESCRIPTION_CONTAINS
        } else {
            0
        };

        let words: u32 = self
            .name
            .split_whitespace()
            .map(|word| {
                if word == term {
                    WORD_EXACT
                } else if word.starts_with(term) {
                    WORD_PREFIX
                } else {
                    0
                }
            })
            .sum();

        name_tier + category + description + words
    }
}

/// Calculate the relevance score of an item for a search term.
///
/// `term` must already be normalized (trimmed, lower-cased) and non-empty;
/// [`crate::search`] takes care of that and never scores an empty query.
///
/// # Example
///
/// ```
/// use sfx_search::{relevance_score, SearchItem};
///
/// let item = SearchItem::new(1, "Rain Rain", "Loops", "");
/// // prefix tier (75) + two exact word bonuses (15 + 15)
/// assert_eq!(relevance_score(&item, "rain"), 105);
/// ```
pub fn relevance_score<T: Searchable + ?Sized>(item: &T, term: &str) -> u32 {
    Normalized::of(item).score(term)
}
