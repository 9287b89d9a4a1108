//! File-backed local cache
//!
//! Each key is one JSON file under the data directory. Writes go to a
//! temporary file in the same directory which is then renamed over the
//! target, so a crash never leaves a half-written value behind.
//!
//! # Example
//!
//! ```rust,no_run
//! use sfx_library::local::{LocalStore, keys};
//!
//! let store = LocalStore::open("/tmp/sfx")?;
//! store.set(keys::FAVORITES, &vec![1, 5])?;
//! let favorites: Option<Vec<u32>> = store.get(keys::FAVORITES)?;
//! # Ok::<(), sfx_library::LibraryError>(())
//! ```

use crate::error::Result;
use crate::model::SoundEffect;
use crate::preferences::{Favorites, Theme};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Cache keys
pub mod keys {
    /// Custom and edited sounds
    pub const SOUND_EFFECTS: &str = "sound_effects";
    /// Categories added by the user
    pub const CATEGORIES: &str = "categories";
    /// Favorite sound ids
    pub const FAVORITES: &str = "favorites";
    /// Anonymous owner id
    pub const OWNER_ID: &str = "owner_id";
    /// Theme preference
    pub const THEME: &str = "theme";
}

/// Local JSON cache rooted at a data directory
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open (and create if needed) the cache directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Cache directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Raw stored text for a key
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Read and deserialize a key; a missing file is `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Store raw text under a key
    pub fn set_raw(&self, key: &str, text: &str) -> Result<()> {
        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(text.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(self.path(key)).map_err(|e| e.error)?;
        debug!(key, bytes = text.len(), "Wrote local cache entry");
        Ok(())
    }

    /// Serialize and store a value
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.set_raw(key, &text)
    }

    /// Remove a key; returns whether it existed
    pub fn remove(&self, key: &str) -> Result<bool> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    // ------------------------------------------------------------------
    // Typed accessors
    // ------------------------------------------------------------------

    /// Cached custom sounds, empty when nothing is cached
    pub fn sound_effects(&self) -> Result<Vec<SoundEffect>> {
        Ok(self.get(keys::SOUND_EFFECTS)?.unwrap_or_default())
    }

    /// Replace the cached custom sounds
    pub fn set_sound_effects(&self, sounds: &[SoundEffect]) -> Result<()> {
        self.set(keys::SOUND_EFFECTS, sounds)
    }

    /// Locally added categories
    ///
    /// An unreadable entry is logged and treated as empty.
    pub fn categories(&self) -> Vec<String> {
        match self.get::<Vec<String>>(keys::CATEGORIES) {
            Ok(categories) => categories.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable local categories");
                Vec::new()
            }
        }
    }

    /// Replace the locally added categories
    pub fn set_categories(&self, categories: &[String]) -> Result<()> {
        self.set(keys::CATEGORIES, categories)
    }

    /// Favorite ids
    pub fn favorites(&self) -> Result<Favorites> {
        Ok(self.get(keys::FAVORITES)?.unwrap_or_default())
    }

    /// Persist favorite ids
    pub fn set_favorites(&self, favorites: &Favorites) -> Result<()> {
        self.set(keys::FAVORITES, favorites)
    }

    /// Theme preference, `system` when unset
    pub fn theme(&self) -> Result<Theme> {
        Ok(self.get(keys::THEME)?.unwrap_or_default())
    }

    /// Persist the theme preference
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.set(keys::THEME, &theme)
    }

    /// Owner id for remote rows
    ///
    /// A configured id wins. Otherwise the persisted anonymous id is used,
    /// generating and saving a new UUID v4 on first use.
    pub fn owner_id(&self, configured: Option<&str>) -> Result<String> {
        if let Some(id) = configured.map(str::trim).filter(|id| !id.is_empty()) {
            return Ok(id.to_string());
        }

        if let Some(id) = self.get::<String>(keys::OWNER_ID)? {
            return Ok(id);
        }

        let id = uuid::Uuid::new_v4().to_string();
        self.set(keys::OWNER_ID, &id)?;
        info!(owner_id = %id, "Generated anonymous owner id");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path().join("data")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_key_is_none() {
        let (_dir, store) = store();
        assert_eq!(store.get::<Vec<u32>>("nothing").unwrap(), None);
        assert!(!store.remove("nothing").unwrap());
        assert!(store.sound_effects().unwrap().is_empty());
    }

    #[test]
    fn test_set_get_remove() {
        let (_dir, store) = store();
        store.set("numbers", &vec![3, 1, 2]).unwrap();
        assert_eq!(store.get::<Vec<u32>>("numbers").unwrap(), Some(vec![3, 1, 2]));
        assert_eq!(store.get_raw("numbers").unwrap().as_deref(), Some("[3,1,2]"));

        assert!(store.remove("numbers").unwrap());
        assert_eq!(store.get::<Vec<u32>>("numbers").unwrap(), None);
    }

    #[test]
    fn test_sounds_round_trip() {
        let (_dir, store) = store();
        let sounds = vec![SoundEffect::new(8, "Door", "Foley", "/sounds/door.mp3")];
        store.set_sound_effects(&sounds).unwrap();
        assert_eq!(store.sound_effects().unwrap(), sounds);
    }

    #[test]
    fn test_corrupt_categories_are_ignored() {
        let (_dir, store) = store();
        store.set_raw(keys::CATEGORIES, "{not json").unwrap();
        assert!(store.categories().is_empty());

        store.set_categories(&["Foley".to_string()]).unwrap();
        assert_eq!(store.categories(), vec!["Foley"]);
    }

    #[test]
    fn test_corrupt_sounds_are_an_error() {
        let (_dir, store) = store();
        store.set_raw(keys::SOUND_EFFECTS, "[{").unwrap();
        assert!(store.sound_effects().is_err());
    }

    #[test]
    fn test_owner_id_is_stable() {
        let (_dir, store) = store();
        let first = store.owner_id(None).unwrap();
        assert!(uuid::Uuid::parse_str(&first).is_ok());
        assert_eq!(store.owner_id(None).unwrap(), first);
        assert_eq!(store.owner_id(Some("user-42")).unwrap(), "user-42");
        assert_eq!(store.owner_id(Some("  ")).unwrap(), first);
    }

    #[test]
    fn test_preferences() {
        let (_dir, store) = store();
        assert_eq!(store.theme().unwrap(), Theme::System);
        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(store.theme().unwrap(), Theme::Dark);

        let mut favorites = Favorites::new();
        favorites.toggle(4);
        store.set_favorites(&favorites).unwrap();
        assert_eq!(store.favorites().unwrap().ids(), &[4]);
    }
}
