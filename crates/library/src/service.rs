//! Library service: the catalog kept in sync with a [`SoundStore`] and the
//! local cache.
//!
//! Reads prefer the store and fall back to the local cache when it fails.
//! Writes go to the store first; when no store is configured they apply
//! locally, and when a configured store fails the write is rejected.

use crate::builtin::{builtin_categories, DEFAULT_ICON_COLOR};
use crate::catalog::{known_categories, Catalog};
use crate::error::{LibraryError, Result};
use crate::local::LocalStore;
use crate::model::{Icon, SoundEffect};
use crate::preferences::{Favorites, Theme};
use crate::store::SoundStore;
use crate::transfer::{export_json, parse_import};
use serde_json::json;
use sfx_core::config::LibraryConfig;
use sfx_search::{SearchQuery, SearchResult};
use sfx_telemetry::{metrics, Event, Timer};
use tracing::{debug, info, instrument, warn};

/// Audio file used by category placeholder sounds
pub const PLACEHOLDER_FILE: &str = "/sounds/click.mp3";

/// Where the loaded sounds came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Built-ins merged with the store's sounds
    Remote,
    /// Built-ins merged with the local cache after the store failed
    LocalCache,
}

/// Result of [`LibraryService::add_category`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// The category was set on the sound being edited
    Attached,
    /// A placeholder sound was created and saved to the store
    Synced(SoundEffect),
    /// The category is only known locally
    LocalOnly,
}

/// Sound-effect library over a store and a local cache
pub struct LibraryService<S> {
    store: S,
    local: LocalStore,
    owner_id: String,
    catalog: Catalog,
    categories: Vec<String>,
    favorites: Favorites,
    theme: Theme,
}

impl<S: SoundStore> LibraryService<S> {
    /// Create a service with built-ins only; call [`LibraryService::load`] to
    /// bring in custom sounds.
    pub fn new(store: S, local: LocalStore, owner_id: impl Into<String>) -> Result<Self> {
        let favorites = local.favorites()?;
        let theme = local.theme()?;

        Ok(Self {
            store,
            local,
            owner_id: owner_id.into(),
            catalog: Catalog::with_builtins(),
            categories: builtin_categories(),
            favorites,
            theme,
        })
    }

    /// Open the local cache described by `config` and resolve the owner id
    pub fn open(store: S, config: &LibraryConfig) -> Result<Self> {
        let local = LocalStore::open(config.resolved_data_dir())?;
        let owner_id = local.owner_id(config.owner_id.as_deref())?;
        Self::new(store, local, owner_id)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current sounds in display order
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Known categories (without `"All"`)
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Favorite ids
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Theme preference
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Owner id used for store rows
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Local cache
    pub fn local(&self) -> &LocalStore {
        &self.local
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Replace the catalog with built-ins merged with the owner's sounds
    ///
    /// When the store fails the local cache is merged instead.
    #[instrument(skip(self), fields(owner_id = %self.owner_id))]
    pub async fn load(&mut self) -> Result<LoadSource> {
        let timer = Timer::start("library.load_ms");
        metrics().increment("store.reads");

        let result = self.store.fetch_for_owner(&self.owner_id).await;
        let source = match result {
            Ok(remote) => {
                debug!(count = remote.len(), "Loaded custom sounds from store");
                self.catalog = Catalog::merged(remote);
                LoadSource::Remote
            }
            Err(e) if e.is_remote() => {
                self.note_read_fallback(&e);
                let cached = self.local.sound_effects()?;
                debug!(count = cached.len(), "Loaded custom sounds from local cache");
                self.catalog = Catalog::merged(cached);
                LoadSource::LocalCache
            }
            Err(e) => return Err(e),
        };

        timer.stop();
        Ok(source)
    }

    /// Refresh the known categories
    ///
    /// Store categories, then locally added ones, then built-ins. When the
    /// store fails, the local list is used, or the built-ins if that is empty.
    #[instrument(skip(self), fields(owner_id = %self.owner_id))]
    pub async fn load_categories(&mut self) -> Result<&[String]> {
        metrics().increment("store.reads");
        let local = self.local.categories();

        self.categories = match self.store.fetch_categories(&self.owner_id).await {
            Ok(remote) => known_categories(&remote, &local),
            Err(e) if e.is_remote() => {
                self.note_read_fallback(&e);
                if local.is_empty() { builtin_categories() } else { local }
            }
            Err(e) => return Err(e),
        };

        Ok(&self.categories)
    }

    fn note_read_fallback(&self, error: &LibraryError) {
        if matches!(error, LibraryError::Offline) {
            debug!("No remote store configured, using local cache");
        } else {
            metrics().increment("store.failures");
            warn!(error = %error, "Store unavailable, falling back to local cache");
        }
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Map a store write result: offline writes apply locally, other
    /// failures reject the change.
    fn check_write(&self, operation: &str, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                metrics().increment("store.writes");
                Ok(())
            }
            Err(LibraryError::Offline) => {
                debug!(operation, "No remote store configured, change kept locally");
                Ok(())
            }
            Err(e) => {
                metrics().increment("store.failures");
                warn!(operation, error = %e, "Store write failed");
                Err(e)
            }
        }
    }

    fn persist_custom(&self) -> Result<()> {
        self.local.set_sound_effects(&self.catalog.custom_sounds())
    }

    /// Validate and save a sound, replacing any sound with the same id
    ///
    /// Returns `true` when an existing sound was updated.
    #[instrument(skip(self, sound), fields(id = sound.id))]
    pub async fn save_sound(&mut self, sound: SoundEffect) -> Result<bool> {
        sound.validate()?;

        let result = self.store.upsert(&self.owner_id, &sound).await;
        self.check_write("upsert", result)?;

        let name = sound.name.clone();
        let updated = self.catalog.upsert(sound);
        self.persist_custom()?;

        info!(name = %name, updated, "Saved sound effect");
        Ok(updated)
    }

    /// Delete a sound by id
    #[instrument(skip(self))]
    pub async fn delete_sound(&mut self, id: u32) -> Result<SoundEffect> {
        if self.catalog.get(id).is_none() {
            return Err(LibraryError::NotFound(id));
        }

        let result = self.store.delete(&self.owner_id, id).await;
        self.check_write("delete", result)?;

        let removed = self.catalog.remove(id).ok_or(LibraryError::NotFound(id))?;
        self.persist_custom()?;

        info!(name = %removed.name, "Deleted sound effect");
        Ok(removed)
    }

    /// Add a category
    ///
    /// The trimmed name must be non-empty and new. With `attach_to`, the
    /// sound being edited takes the category. Otherwise a placeholder sound
    /// is saved to the store so the category exists remotely; if that fails
    /// the category stays local only.
    #[instrument(skip(self, attach_to))]
    pub async fn add_category(
        &mut self,
        name: &str,
        attach_to: Option<&mut SoundEffect>,
    ) -> Result<CategoryOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::EmptyCategory);
        }
        if self.categories.iter().any(|c| c == name) {
            return Err(LibraryError::DuplicateCategory(name.to_string()));
        }

        if let Some(sound) = attach_to {
            self.register_category(name)?;
            sound.category = name.to_string();
            return Ok(CategoryOutcome::Attached);
        }

        let placeholder = SoundEffect::new(
            self.catalog.next_id()?,
            format!("{name} Placeholder"),
            name,
            PLACEHOLDER_FILE,
        )
        .with_description(format!("Placeholder for {name} category"))
        .with_icon(Icon::default_svg(Some(DEFAULT_ICON_COLOR)));
        self.register_category(name)?;

        match self.store.upsert(&self.owner_id, &placeholder).await {
            Ok(()) => {
                metrics().increment("store.writes");
                self.catalog.upsert(placeholder.clone());
                self.persist_custom()?;
                Ok(CategoryOutcome::Synced(placeholder))
            }
            Err(e) if e.is_remote() => {
                if !matches!(e, LibraryError::Offline) {
                    metrics().increment("store.failures");
                    warn!(error = %e, "Category added locally but failed to sync");
                }
                Ok(CategoryOutcome::LocalOnly)
            }
            Err(e) => Err(e),
        }
    }

    fn register_category(&mut self, name: &str) -> Result<()> {
        self.categories.push(name.to_string());
        self.local.set_categories(&self.categories)?;
        info!(category = name, "Added category");
        Ok(())
    }

    /// Move `active` to the position of `over` and save the new order
    ///
    /// Returns `false` when nothing moved. The in-memory order only changes
    /// once the store and the local cache accepted it.
    #[instrument(skip(self))]
    pub async fn reorder(&mut self, active: u32, over: u32) -> Result<bool> {
        let mut reordered = self.catalog.clone();
        if !reordered.reorder(active, over) {
            return Ok(false);
        }

        let custom = reordered.custom_sounds();
        let result = self.store.upsert_many(&self.owner_id, &custom).await;
        self.check_write("upsert_many", result)?;
        self.local.set_sound_effects(&custom)?;
        self.catalog = reordered;

        debug!(active, over, "Reordered sounds");
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Import / export
    // ------------------------------------------------------------------

    /// Custom sounds as a pretty JSON array
    ///
    /// The store's sounds are preferred; when it has none or fails, the local
    /// cache is used.
    #[instrument(skip(self))]
    pub async fn export(&self) -> Result<String> {
        let sounds = match self.store.fetch_for_owner(&self.owner_id).await {
            Ok(remote) if !remote.is_empty() => remote,
            Ok(_) => self.local.sound_effects()?,
            Err(e) if e.is_remote() => {
                self.note_read_fallback(&e);
                self.local.sound_effects()?
            }
            Err(e) => return Err(e),
        };

        if sounds.is_empty() {
            return Err(LibraryError::NothingToExport);
        }

        Event::new("library.export", json!({ "count": sounds.len() })).log();
        export_json(&sounds)
    }

    /// Import a JSON array of sounds
    ///
    /// The sounds are saved to the store, become the local cache, and are
    /// merged over the built-ins to form the new catalog.
    #[instrument(skip(self, json))]
    pub async fn import(&mut self, json: &str) -> Result<usize> {
        let sounds = parse_import(json)?;

        let result = self.store.upsert_many(&self.owner_id, &sounds).await;
        self.check_write("upsert_many", result)?;

        self.local.set_sound_effects(&sounds)?;
        let count = sounds.len();
        self.catalog = Catalog::merged(sounds);

        metrics().increment_by("library.imported", count as u64);
        Event::new("library.import", json!({ "count": count })).log();
        Ok(count)
    }

    // ------------------------------------------------------------------
    // Preferences
    // ------------------------------------------------------------------

    /// Toggle a favorite; returns whether it is a favorite afterwards
    ///
    /// Unknown ids can be removed but not added.
    pub fn toggle_favorite(&mut self, id: u32) -> Result<bool> {
        if !self.favorites.contains(id) && self.catalog.get(id).is_none() {
            return Err(LibraryError::NotFound(id));
        }

        let favorite = self.favorites.toggle(id);
        self.local.set_favorites(&self.favorites)?;
        debug!(id, favorite, "Toggled favorite");
        Ok(favorite)
    }

    /// Persist a theme preference
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.local.set_theme(theme)?;
        self.theme = theme;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Ranked search over the whole catalog
    pub fn search(&self, query: &SearchQuery) -> Vec<&SoundEffect> {
        self.browse(query, false)
    }

    /// Ranked search, limited to favorites when `favorites_only` is set
    pub fn browse(&self, query: &SearchQuery, favorites_only: bool) -> Vec<&SoundEffect> {
        self.browse_scored(query, favorites_only)
            .into_iter()
            .map(|result| result.item)
            .collect()
    }

    /// Ranked search keeping relevance scores
    pub fn browse_scored(
        &self,
        query: &SearchQuery,
        favorites_only: bool,
    ) -> Vec<SearchResult<&SoundEffect>> {
        let timer = Timer::start("search.latency_ms");
        metrics().increment("search.queries");

        let favorites = favorites_only.then_some(&self.favorites);
        let results = self.catalog.browse_scored(query, favorites);

        timer.stop();
        results
    }

    /// Typeahead suggestions
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<&SoundEffect> {
        metrics().increment("search.suggestions");
        self.catalog.suggest(partial, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::keys;
    use crate::store::{InMemoryStore, OfflineStore};
    use tempfile::TempDir;

    const OWNER: &str = "owner-1";

    fn service() -> (TempDir, LibraryService<InMemoryStore>) {
        let dir = TempDir::new().unwrap();
        let local = LocalStore::open(dir.path()).unwrap();
        let service = LibraryService::new(InMemoryStore::new(), local, OWNER).unwrap();
        (dir, service)
    }

    fn offline() -> (TempDir, LibraryService<OfflineStore>) {
        let dir = TempDir::new().unwrap();
        let local = LocalStore::open(dir.path()).unwrap();
        let service = LibraryService::new(OfflineStore, local, OWNER).unwrap();
        (dir, service)
    }

    fn door() -> SoundEffect {
        SoundEffect::new(6, "Door Slam", "Foley", "/sounds/door.mp3")
            .with_description("Heavy wooden door")
    }

    fn ids(sounds: &[&SoundEffect]) -> Vec<u32> {
        sounds.iter().map(|s| s.id).collect()
    }

    #[tokio::test]
    async fn test_load_merges_remote_over_builtins() {
        let (_dir, mut service) = service();
        let mut rain = service.catalog().get(5).cloned().unwrap();
        rain.name = "Heavy Rain".to_string();
        service.store().upsert(OWNER, &rain).await.unwrap();
        service.store().upsert(OWNER, &door()).await.unwrap();

        assert_eq!(service.load().await.unwrap(), LoadSource::Remote);
        let order: Vec<u32> = service.catalog().sounds().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(service.catalog().get(5).unwrap().name, "Heavy Rain");
    }

    #[tokio::test]
    async fn test_load_falls_back_to_local_cache() {
        let (_dir, mut service) = service();
        service.local().set_sound_effects(&[door()]).unwrap();
        service.store().set_failing(true);

        assert_eq!(service.load().await.unwrap(), LoadSource::LocalCache);
        assert_eq!(service.catalog().get(6), Some(&door()));
    }

    #[tokio::test]
    async fn test_save_writes_store_and_cache() {
        let (_dir, mut service) = service();
        assert!(!service.save_sound(door()).await.unwrap());

        assert_eq!(service.store().sounds_for(OWNER), vec![door()]);
        assert_eq!(service.local().sound_effects().unwrap(), vec![door()]);

        let renamed = door().with_description("Slammed shut");
        assert!(service.save_sound(renamed.clone()).await.unwrap());
        assert_eq!(service.catalog().get(6), Some(&renamed));
        assert_eq!(service.catalog().len(), 6);
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_sound() {
        let (_dir, mut service) = service();
        let err = service
            .save_sound(SoundEffect::new(6, "", "Foley", "/sounds/x.mp3"))
            .await
            .unwrap_err();
        assert!(matches!(err, LibraryError::Core(_)));
        assert!(service.store().calls().is_empty());
    }

    #[tokio::test]
    async fn test_save_fails_when_store_fails() {
        let (_dir, mut service) = service();
        service.store().set_failing(true);
        assert!(service.save_sound(door()).await.is_err());
        assert!(service.catalog().get(6).is_none());
        assert!(service.local().get_raw(keys::SOUND_EFFECTS).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_offline_writes_stay_local() {
        let (_dir, mut service) = offline();
        service.save_sound(door()).await.unwrap();
        assert_eq!(service.local().sound_effects().unwrap(), vec![door()]);

        service.load().await.unwrap();
        assert_eq!(service.catalog().get(6), Some(&door()));
    }

    #[tokio::test]
    async fn test_edited_builtin_is_cached() {
        let (_dir, mut service) = service();
        let mut click = service.catalog().get(1).cloned().unwrap();
        click.description = "Sharper click".to_string();
        service.save_sound(click.clone()).await.unwrap();
        assert_eq!(service.local().sound_effects().unwrap(), vec![click]);
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, mut service) = service();
        service.save_sound(door()).await.unwrap();

        let removed = service.delete_sound(6).await.unwrap();
        assert_eq!(removed.name, "Door Slam");
        assert!(service.store().sounds_for(OWNER).is_empty());
        assert!(service.local().sound_effects().unwrap().is_empty());

        assert!(matches!(
            service.delete_sound(6).await.unwrap_err(),
            LibraryError::NotFound(6)
        ));
    }

    #[tokio::test]
    async fn test_add_category_creates_placeholder() {
        let (_dir, mut service) = service();
        let outcome = service.add_category("  Foley ", None).await.unwrap();

        let CategoryOutcome::Synced(placeholder) = outcome else {
            panic!("expected a synced placeholder");
        };
        assert_eq!(placeholder.id, 6);
        assert_eq!(placeholder.name, "Foley Placeholder");
        assert_eq!(placeholder.description, "Placeholder for Foley category");
        assert_eq!(placeholder.file, PLACEHOLDER_FILE);
        assert_eq!(placeholder.icon.color.as_deref(), Some(DEFAULT_ICON_COLOR));

        assert!(service.categories().iter().any(|c| c == "Foley"));
        assert_eq!(service.local().categories(), service.categories());
        assert_eq!(service.store().sounds_for(OWNER), vec![placeholder]);
    }

    #[tokio::test]
    async fn test_add_category_attaches_to_edited_sound() {
        let (_dir, mut service) = service();
        let mut editing = door();
        let outcome = service.add_category("Doors", Some(&mut editing)).await.unwrap();
        assert_eq!(outcome, CategoryOutcome::Attached);
        assert_eq!(editing.category, "Doors");
        assert!(service.store().calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_category_rejections() {
        let (_dir, mut service) = service();
        assert!(matches!(
            service.add_category("   ", None).await.unwrap_err(),
            LibraryError::EmptyCategory
        ));
        assert!(matches!(
            service.add_category("UI", None).await.unwrap_err(),
            LibraryError::DuplicateCategory(ref c) if c == "UI"
        ));
    }

    #[tokio::test]
    async fn test_add_category_without_free_id() {
        let (_dir, mut service) = service();
        let json = format!(
            r#"[{{"id": {}, "name": "Last", "category": "Foley", "file": "/sounds/last.mp3"}}]"#,
            u32::MAX
        );
        service.import(&json).await.unwrap();
        let calls = service.store().calls().len();

        assert!(matches!(
            service.add_category("Voices", None).await.unwrap_err(),
            LibraryError::IdsExhausted
        ));
        assert!(!service.categories().iter().any(|c| c == "Voices"));
        assert_eq!(service.store().calls().len(), calls);
        assert_eq!(service.catalog().len(), 6);
    }

    #[tokio::test]
    async fn test_add_category_local_only_when_store_fails() {
        let (_dir, mut service) = service();
        service.store().set_failing(true);
        let outcome = service.add_category("Foley", None).await.unwrap();
        assert_eq!(outcome, CategoryOutcome::LocalOnly);
        assert_eq!(service.catalog().len(), 5);
        assert!(service.local().categories().contains(&"Foley".to_string()));
    }

    #[tokio::test]
    async fn test_load_categories() {
        let (_dir, mut service) = service();
        service.store().upsert(OWNER, &door()).await.unwrap();
        service.local().set_categories(&["Voices".to_string()]).unwrap();

        let categories = service.load_categories().await.unwrap().to_vec();
        assert_eq!(categories, vec!["Foley", "Voices", "UI", "Nature"]);

        service.store().set_failing(true);
        let categories = service.load_categories().await.unwrap().to_vec();
        assert_eq!(categories, vec!["Voices"]);
    }

    #[tokio::test]
    async fn test_load_categories_offline_defaults_to_builtins() {
        let (_dir, mut service) = offline();
        let categories = service.load_categories().await.unwrap().to_vec();
        assert_eq!(categories, vec!["UI", "Nature"]);
    }

    #[tokio::test]
    async fn test_reorder_persists_customs() {
        let (_dir, mut service) = service();
        service.save_sound(door()).await.unwrap();

        assert!(service.reorder(6, 1).await.unwrap());
        let order: Vec<u32> = service.catalog().sounds().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![6, 1, 2, 3, 4, 5]);
        assert_eq!(service.store().calls().last().map(String::as_str), Some("upsert_many"));

        assert!(!service.reorder(6, 6).await.unwrap());
        assert!(!service.reorder(6, 99).await.unwrap());
    }

    #[tokio::test]
    async fn test_reorder_keeps_order_when_store_rejects() {
        let (_dir, mut service) = service();
        service.save_sound(door()).await.unwrap();
        service.store().set_failing(true);

        assert!(matches!(
            service.reorder(6, 1).await.unwrap_err(),
            LibraryError::Store(_)
        ));
        let order: Vec<u32> = service.catalog().sounds().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(service.local().sound_effects().unwrap(), vec![door()]);

        service.store().set_failing(false);
        assert!(service.reorder(6, 1).await.unwrap());
        let order: Vec<u32> = service.catalog().sounds().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![6, 1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_export_prefers_store_then_cache() {
        let (_dir, mut service) = service();
        assert!(matches!(
            service.export().await.unwrap_err(),
            LibraryError::NothingToExport
        ));

        service.save_sound(door()).await.unwrap();
        let exported = service.export().await.unwrap();
        assert_eq!(parse_import(&exported).unwrap(), vec![door()]);

        service.store().set_failing(true);
        let exported = service.export().await.unwrap();
        assert_eq!(parse_import(&exported).unwrap(), vec![door()]);
    }

    #[tokio::test]
    async fn test_import_replaces_cache_and_merges() {
        let (_dir, mut service) = service();
        service.save_sound(door()).await.unwrap();

        let json = r#"[
            {"id": 5, "name": "Storm", "category": "Nature", "file": "/sounds/storm.mp3"},
            {"id": 9, "name": "Bird", "category": "Nature", "file": "/sounds/bird.mp3"}
        ]"#;
        assert_eq!(service.import(json).await.unwrap(), 2);

        let order: Vec<u32> = service.catalog().sounds().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 9]);
        assert_eq!(service.catalog().get(5).unwrap().name, "Storm");
        assert_eq!(service.local().sound_effects().unwrap().len(), 2);
        assert_eq!(service.store().sounds_for(OWNER).len(), 3);
    }

    #[tokio::test]
    async fn test_import_rejects_non_array() {
        let (_dir, mut service) = service();
        let err = service.import(r#"{"id": 1}"#).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid format: expected an array");
        assert!(service.store().calls().is_empty());
    }

    #[tokio::test]
    async fn test_favorites_and_browse() {
        let (dir, mut service) = service();
        assert!(service.toggle_favorite(5).unwrap());
        assert!(service.toggle_favorite(2).unwrap());
        assert!(matches!(
            service.toggle_favorite(42).unwrap_err(),
            LibraryError::NotFound(42)
        ));

        let favorites = service.browse(&SearchQuery::new(""), true);
        assert_eq!(ids(&favorites), vec![2, 5]);
        let ranked = service.browse(&SearchQuery::new("ui"), true);
        assert_eq!(ids(&ranked), vec![2]);
        assert_eq!(ids(&service.search(&SearchQuery::new("rain"))), vec![5]);

        assert!(!service.toggle_favorite(5).unwrap());
        let reopened =
            LibraryService::new(InMemoryStore::new(), LocalStore::open(dir.path()).unwrap(), OWNER)
                .unwrap();
        assert_eq!(reopened.favorites().ids(), &[2]);
    }

    #[tokio::test]
    async fn test_theme_persists() {
        let (dir, mut service) = service();
        assert_eq!(service.theme(), Theme::System);
        service.set_theme(Theme::Light).unwrap();

        let reopened =
            LibraryService::new(InMemoryStore::new(), LocalStore::open(dir.path()).unwrap(), OWNER)
                .unwrap();
        assert_eq!(reopened.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn test_suggest() {
        let (_dir, service) = service();
        assert_eq!(ids(&service.suggest("not", 5)), vec![2]);
        assert!(service.suggest("x", 0).is_empty());
    }
}
