//! Remote persistence seam
//!
//! [`SoundStore`] is what the library service talks to. The HTTP client
//! implements it for real deployments; [`OfflineStore`] stands in when no
//! store is configured and [`InMemoryStore`] backs tests.

use crate::error::{LibraryError, Result};
use crate::model::SoundEffect;
use sfx_api_client::{ApiError, ClientConfig, SoundEffectRow, SoundEffectsApi, StoreClient};
use sfx_core::config::StoreConfig;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Per-owner persistence for custom sounds
pub trait SoundStore: Send + Sync {
    /// Every sound belonging to the owner
    fn fetch_for_owner(&self, owner_id: &str) -> impl Future<Output = Result<Vec<SoundEffect>>> + Send;

    /// Category of every sound belonging to the owner, duplicates removed
    fn fetch_categories(&self, owner_id: &str) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Insert or replace one sound
    fn upsert(&self, owner_id: &str, sound: &SoundEffect) -> impl Future<Output = Result<()>> + Send;

    /// Insert or replace many sounds at once
    fn upsert_many(
        &self,
        owner_id: &str,
        sounds: &[SoundEffect],
    ) -> impl Future<Output = Result<()>> + Send;

    /// Delete one of the owner's sounds
    fn delete(&self, owner_id: &str, id: u32) -> impl Future<Output = Result<()>> + Send;
}

fn dedup(categories: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(categories.len());
    for category in categories {
        if !unique.contains(&category) {
            unique.push(category);
        }
    }
    unique
}

// ============================================================================
// Remote
// ============================================================================

impl SoundStore for SoundEffectsApi {
    async fn fetch_for_owner(&self, owner_id: &str) -> Result<Vec<SoundEffect>> {
        let rows = self.list_for_owner(owner_id).await?;
        Ok(rows.into_iter().map(SoundEffect::from).collect())
    }

    async fn fetch_categories(&self, owner_id: &str) -> Result<Vec<String>> {
        Ok(dedup(self.categories_for_owner(owner_id).await?))
    }

    async fn upsert(&self, owner_id: &str, sound: &SoundEffect) -> Result<()> {
        let row = sound.to_row(owner_id);
        SoundEffectsApi::upsert(self, &row).await?;
        Ok(())
    }

    async fn upsert_many(&self, owner_id: &str, sounds: &[SoundEffect]) -> Result<()> {
        let rows: Vec<SoundEffectRow> = sounds.iter().map(|s| s.to_row(owner_id)).collect();
        SoundEffectsApi::upsert_many(self, &rows).await?;
        Ok(())
    }

    async fn delete(&self, owner_id: &str, id: u32) -> Result<()> {
        SoundEffectsApi::delete(self, id, owner_id).await?;
        Ok(())
    }
}

// ============================================================================
// Offline
// ============================================================================

/// Store used when no remote is configured; every call fails with
/// [`LibraryError::Offline`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineStore;

impl SoundStore for OfflineStore {
    async fn fetch_for_owner(&self, _owner_id: &str) -> Result<Vec<SoundEffect>> {
        Err(LibraryError::Offline)
    }

    async fn fetch_categories(&self, _owner_id: &str) -> Result<Vec<String>> {
        Err(LibraryError::Offline)
    }

    async fn upsert(&self, _owner_id: &str, _sound: &SoundEffect) -> Result<()> {
        Err(LibraryError::Offline)
    }

    async fn upsert_many(&self, _owner_id: &str, _sounds: &[SoundEffect]) -> Result<()> {
        Err(LibraryError::Offline)
    }

    async fn delete(&self, _owner_id: &str, _id: u32) -> Result<()> {
        Err(LibraryError::Offline)
    }
}

/// The store selected by configuration
#[derive(Clone)]
pub enum ConfiguredStore {
    /// Remote table over HTTP
    Remote(SoundEffectsApi),
    /// No store URL configured
    Offline(OfflineStore),
}

impl ConfiguredStore {
    /// Build from the `[store]` config section
    ///
    /// A missing URL selects the offline store; any other configuration
    /// problem is an error.
    pub fn from_config(store: &StoreConfig) -> Result<Self> {
        match ClientConfig::from_store(store) {
            Ok(config) => Ok(Self::Remote(StoreClient::with_config(config)?.sound_effects())),
            Err(ApiError::NotConfigured) => Ok(Self::Offline(OfflineStore)),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether changes stay local
    #[must_use]
    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline(_))
    }
}

impl SoundStore for ConfiguredStore {
    async fn fetch_for_owner(&self, owner_id: &str) -> Result<Vec<SoundEffect>> {
        match self {
            Self::Remote(api) => SoundStore::fetch_for_owner(api, owner_id).await,
            Self::Offline(offline) => offline.fetch_for_owner(owner_id).await,
        }
    }

    async fn fetch_categories(&self, owner_id: &str) -> Result<Vec<String>> {
        match self {
            Self::Remote(api) => SoundStore::fetch_categories(api, owner_id).await,
            Self::Offline(offline) => offline.fetch_categories(owner_id).await,
        }
    }

    async fn upsert(&self, owner_id: &str, sound: &SoundEffect) -> Result<()> {
        match self {
            Self::Remote(api) => SoundStore::upsert(api, owner_id, sound).await,
            Self::Offline(offline) => offline.upsert(owner_id, sound).await,
        }
    }

    async fn upsert_many(&self, owner_id: &str, sounds: &[SoundEffect]) -> Result<()> {
        match self {
            Self::Remote(api) => SoundStore::upsert_many(api, owner_id, sounds).await,
            Self::Offline(offline) => offline.upsert_many(owner_id, sounds).await,
        }
    }

    async fn delete(&self, owner_id: &str, id: u32) -> Result<()> {
        match self {
            Self::Remote(api) => SoundStore::delete(api, owner_id, id).await,
            Self::Offline(offline) => offline.delete(owner_id, id).await,
        }
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Thread-safe in-memory store keyed by owner and id
///
/// Insertion order is preserved. [`InMemoryStore::set_failing`] makes every
/// call fail with a 503 so fallback paths can be exercised.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<(String, SoundEffect)>>,
    failing: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated outages
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Sounds stored for an owner, in insertion order
    #[must_use]
    pub fn sounds_for(&self, owner_id: &str) -> Vec<SoundEffect> {
        self.rows
            .lock()
            .map(|rows| {
                rows.iter()
                    .filter(|(owner, _)| owner == owner_id)
                    .map(|(_, sound)| sound.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Names of the operations called so far
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn enter(&self, operation: &str) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(operation.to_string());
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::api_response(503, "store unavailable").into());
        }
        Ok(())
    }

    fn with_rows<R>(&self, f: impl FnOnce(&mut Vec<(String, SoundEffect)>) -> R) -> R {
        let mut rows = self
            .rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut rows)
    }

    fn put(&self, owner_id: &str, sound: &SoundEffect) {
        self.with_rows(|rows| {
            match rows
                .iter_mut()
                .find(|(owner, s)| owner == owner_id && s.id == sound.id)
            {
                Some((_, existing)) => *existing = sound.clone(),
                None => rows.push((owner_id.to_string(), sound.clone())),
            }
        });
    }
}

impl SoundStore for InMemoryStore {
    async fn fetch_for_owner(&self, owner_id: &str) -> Result<Vec<SoundEffect>> {
        self.enter("fetch_for_owner")?;
        Ok(self.sounds_for(owner_id))
    }

    async fn fetch_categories(&self, owner_id: &str) -> Result<Vec<String>> {
        self.enter("fetch_categories")?;
        Ok(dedup(
            self.sounds_for(owner_id)
                .into_iter()
                .map(|s| s.category)
                .collect(),
        ))
    }

    async fn upsert(&self, owner_id: &str, sound: &SoundEffect) -> Result<()> {
        self.enter("upsert")?;
        self.put(owner_id, sound);
        Ok(())
    }

    async fn upsert_many(&self, owner_id: &str, sounds: &[SoundEffect]) -> Result<()> {
        self.enter("upsert_many")?;
        for sound in sounds {
            self.put(owner_id, sound);
        }
        Ok(())
    }

    async fn delete(&self, owner_id: &str, id: u32) -> Result<()> {
        self.enter("delete")?;
        self.with_rows(|rows| rows.retain(|(owner, s)| !(owner == owner_id && s.id == id)));
        Ok(())
    }
}
