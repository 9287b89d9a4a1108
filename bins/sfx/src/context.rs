//! State shared by every command

use anyhow::{Context as _, Result};
use indicatif::ProgressBar;
use sfx_cli::{progress, OutputFormat, Status};
use sfx_core::config::Config;
use sfx_library::{ConfiguredStore, LibraryService, LoadSource};

/// The library as the CLI uses it
pub type Library = LibraryService<ConfiguredStore>;

/// Loaded configuration plus global flags
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: Config, format: OutputFormat) -> Self {
        Self { config, format }
    }

    pub fn is_json(&self) -> bool {
        self.format.is_json()
    }

    /// Open the library with built-ins only
    pub fn open(&self) -> Result<Library> {
        let store = ConfiguredStore::from_config(&self.config.schema.store)
            .context("Failed to configure the remote store")?;
        let library = LibraryService::open(store, &self.config.schema.library)
            .context("Failed to open the local library")?;
        Ok(library)
    }

    /// Open the library and load custom sounds
    pub async fn load(&self) -> Result<Library> {
        let mut library = self.open()?;

        let pb = self.spinner("Loading sounds...");
        let source = library.load().await;
        progress::finish(&pb);

        if source.context("Failed to load sounds")? == LoadSource::LocalCache
            && !library.store().is_offline()
            && !self.is_json()
        {
            Status::warning("Remote store unavailable, showing locally cached sounds");
        }
        Ok(library)
    }

    /// Spinner on stderr, hidden for JSON output
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.is_json() {
            ProgressBar::hidden()
        } else {
            progress::spinner(message)
        }
    }
}
