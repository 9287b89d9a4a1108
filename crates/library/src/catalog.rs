//! The in-memory sound collection: merge, edit, reorder, browse.

use crate::builtin::{builtin, builtin_categories, builtins, is_builtin};
use crate::error::{LibraryError, Result};
use crate::model::SoundEffect;
use crate::preferences::Favorites;
use sfx_search::{search_scored, suggest, SearchQuery, SearchResult, ALL_CATEGORIES};

/// Ordered collection of sounds; order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sounds: Vec<SoundEffect>,
}

impl Catalog {
    /// Catalog over exactly these sounds
    #[must_use]
    pub fn new(sounds: Vec<SoundEffect>) -> Self {
        Self { sounds }
    }

    /// The built-in sounds only
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::new(builtins().to_vec())
    }

    /// Built-ins with `custom` merged over them
    #[must_use]
    pub fn merged(custom: impl IntoIterator<Item = SoundEffect>) -> Self {
        let mut catalog = Self::with_builtins();
        catalog.merge(custom);
        catalog
    }

    /// Each sound replaces the entry with the same id in place, else is appended.
    pub fn merge(&mut self, custom: impl IntoIterator<Item = SoundEffect>) {
        for sound in custom {
            self.upsert(sound);
        }
    }

    /// All sounds in display order
    #[must_use]
    pub fn sounds(&self) -> &[SoundEffect] {
        &self.sounds
    }

    /// Look up a sound by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&SoundEffect> {
        self.sounds.iter().find(|s| s.id == id)
    }

    /// Number of sounds
    #[must_use]
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Sounds that need persisting: everything not built in, plus built-ins
    /// that differ from the shipped version. Display order is kept.
    #[must_use]
    pub fn custom_sounds(&self) -> Vec<SoundEffect> {
        self.sounds
            .iter()
            .filter(|sound| builtin(sound.id).is_none_or(|shipped| shipped != *sound))
            .cloned()
            .collect()
    }

    /// `"All"` followed by each distinct non-empty category in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for sound in &self.sounds {
            if !sound.category.is_empty() && !categories.contains(&sound.category) {
                categories.push(sound.category.clone());
            }
        }
        categories
    }

    /// Replace the sound with the same id, or append it.
    ///
    /// Returns `true` when an existing sound was replaced.
    pub fn upsert(&mut self, sound: SoundEffect) -> bool {
        if let Some(existing) = self.sounds.iter_mut().find(|s| s.id == sound.id) {
            *existing = sound;
            true
        } else {
            self.sounds.push(sound);
            false
        }
    }

    /// Remove a sound by id
    pub fn remove(&mut self, id: u32) -> Option<SoundEffect> {
        let pos = self.sounds.iter().position(|s| s.id == id)?;
        Some(self.sounds.remove(pos))
    }

    /// One past the highest id, or 1 when empty
    ///
    /// Fails with [`LibraryError::IdsExhausted`] once a sound holds `u32::MAX`.
    pub fn next_id(&self) -> Result<u32> {
        match self.sounds.iter().map(|s| s.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(LibraryError::IdsExhausted),
        }
    }

    /// Move the `active` sound to the position currently held by `over`.
    ///
    /// Returns `false` (and leaves the order alone) when the ids are equal or
    /// either is missing.
    pub fn reorder(&mut self, active: u32, over: u32) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(active), self.position(over)) else {
            return false;
        };

        let sound = self.sounds.remove(from);
        self.sounds.insert(to, sound);
        true
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.sounds.iter().position(|s| s.id == id)
    }

    /// Ranked search, optionally limited to favorites first
    #[must_use]
    pub fn browse(&self, query: &SearchQuery, favorites: Option<&Favorites>) -> Vec<&SoundEffect> {
        self.browse_scored(query, favorites)
            .into_iter()
            .map(|result| result.item)
            .collect()
    }

    /// Same as [`Catalog::browse`], keeping each result's relevance score
    #[must_use]
    pub fn browse_scored(
        &self,
        query: &SearchQuery,
        favorites: Option<&Favorites>,
    ) -> Vec<SearchResult<&SoundEffect>> {
        let Some(favorites) = favorites else {
            return search_scored(&self.sounds, query);
        };

        let subset: Vec<&SoundEffect> = self
            .sounds
            .iter()
            .filter(|s| favorites.contains(s.id))
            .collect();
        search_scored(&subset, query)
            .into_iter()
            .map(|result| SearchResult {
                item: *result.item,
                score: result.score,
            })
            .collect()
    }

    /// Typeahead suggestions across all categories
    #[must_use]
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<&SoundEffect> {
        suggest(&self.sounds, partial, limit)
    }

    /// Whether the sound with this id ships with the library
    #[must_use]
    pub fn is_builtin(&self, id: u32) -> bool {
        is_builtin(id)
    }
}

/// Union of remote, local and built-in categories, first occurrence wins.
/// Blanks and the `"All"` sentinel are dropped.
#[must_use]
pub fn known_categories(remote: &[String], local: &[String]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in remote
        .iter()
        .chain(local)
        .cloned()
        .chain(builtin_categories())
    {
        if !category.is_empty() && category != ALL_CATEGORIES && !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}
