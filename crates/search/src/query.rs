//! Query context: free text, category filter, match mode.

use serde::{Deserialize, Serialize};

/// Sentinel category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Category restriction applied before matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,
    /// Only items whose category equals this value exactly (case-sensitive)
    Only(String),
}

impl CategoryFilter {
    /// Whether an item with this category passes the filter
    #[must_use]
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::All, Self::from)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// A single search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Raw free text as typed; may be empty or padded
    #[serde(default)]
    pub text: String,
    /// Category restriction
    #[serde(default)]
    pub category: CategoryFilter,
    /// Require full equality on name/category (description stays substring)
    #[serde(default)]
    pub exact_match: bool,
}

impl SearchQuery {
    /// Fuzzy query over all categories
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Restrict to a category (`"All"` clears the restriction)
    #[must_use]
    pub fn in_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Switch exact-match mode on or off
    #[must_use]
    pub fn exact(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    /// Trimmed, lower-cased term, or `None` when the text is blank
    #[must_use]
    pub fn normalized_term(&self) -> Option<String> {
        let term = self.text.trim();
        (!term.is_empty()).then(|| term.to_lowercase())
    }
}
