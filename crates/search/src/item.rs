//! The searchable view of an item.

use serde::{Deserialize, Serialize};

/// Text fields the search engine reads.
///
/// Implementations return the fields verbatim; matching lower-cases them
/// internally, so display casing is preserved.
pub trait Searchable {
    /// Display name
    fn name(&self) -> &str;
    /// Category, compared exactly (case-sensitive) by category filters
    fn category(&self) -> &str;
    /// Free-text description, may be empty
    fn description(&self) -> &str;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

/// Minimal owned item, used at JSON boundaries and in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Identifier, unique within a collection
    pub id: u32,
    /// Display name
    pub name: String,
    /// Category
    pub category: String,
    /// Description
    #[serde(default)]
    pub description: String,
}

impl SearchItem {
    /// Create a new item
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: description.into(),
        }
    }
}

impl Searchable for SearchItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn description(&self) -> &str {
        &self.description
    }
}
