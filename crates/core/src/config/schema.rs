//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Remote row store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Local library settings
    #[serde(default)]
    pub library: LibraryConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote row store (Supabase) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`. Offline when unset.
    #[serde(default)]
    pub url: Option<String>,

    /// Anonymous API key
    #[serde(default)]
    pub anon_key: Option<String>,

    /// Table holding sound-effect rows
    #[serde(default = "default_table")]
    pub table: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Whether a remote store has been configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}

fn default_table() -> String {
    "sound_effects".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Local library configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LibraryConfig {
    /// Directory for the local cache (favorites, custom sounds, preferences)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Owner id used for remote rows; an anonymous id is generated when unset
    #[serde(default)]
    pub owner_id: Option<String>,
}

impl LibraryConfig {
    /// Resolve the data directory, falling back to the platform data dir
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("sfx"))
                .unwrap_or_else(|| PathBuf::from(".sfx"))
        })
    }
}

/// Search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of typeahead suggestions
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Use exact name/category matching by default
    #[serde(default)]
    pub exact_match: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            exact_match: false,
        }
    }
}

fn default_suggestion_limit() -> usize {
    5
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,

    /// Also write logs to this file
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
