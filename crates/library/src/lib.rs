//! Sound-effect library
//!
//! This crate provides the application layer on top of `sfx-search`:
//!
//! - **Model**: sounds, icons and their mapping to store rows
//! - **Catalog**: built-ins merged with custom sounds, reorder, browse
//! - **Preferences**: favorites and theme
//! - **Local cache**: atomic JSON files under the data directory
//! - **Store seam**: the [`SoundStore`] trait with remote, offline and in-memory backends
//! - **Service**: [`LibraryService`] tying the above together
//!
//! # Example
//!
//! ```rust,no_run
//! use sfx_core::config::Config;
//! use sfx_library::prelude::*;
//! use sfx_search::SearchQuery;
//!
//! # async fn run() -> sfx_library::Result<()> {
//! let config = Config::load(None)?;
//! let store = ConfiguredStore::from_config(&config.schema.store)?;
//! let mut library = LibraryService::open(store, &config.schema.library)?;
//! library.load().await?;
//!
//! for sound in library.search(&SearchQuery::new("rain")) {
//!     println!("{} ({})", sound.name, sound.category);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod local;
pub mod model;
pub mod preferences;
pub mod service;
pub mod store;
pub mod transfer;

pub use catalog::Catalog;
pub use error::{LibraryError, Result};
pub use model::{Icon, IconKind, SoundEffect};
pub use preferences::{Favorites, Theme};
pub use service::{CategoryOutcome, LibraryService, LoadSource};
pub use store::{ConfiguredStore, InMemoryStore, OfflineStore, SoundStore};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::{known_categories, Catalog};
    pub use crate::error::{LibraryError, Result};
    pub use crate::local::LocalStore;
    pub use crate::model::{Icon, IconKind, SoundEffect};
    pub use crate::preferences::{Favorites, Theme};
    pub use crate::service::{CategoryOutcome, LibraryService, LoadSource};
    pub use crate::store::{ConfiguredStore, InMemoryStore, OfflineStore, SoundStore};
}
