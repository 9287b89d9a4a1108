//! Error types for library operations

use sfx_api_client::ApiError;
use sfx_core::ErrorCode;
use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Library errors
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Remote store call failed
    #[error(transparent)]
    Store(#[from] ApiError),

    /// No remote store is configured
    #[error("Remote store is not configured (running offline)")]
    Offline,

    /// Local cache could not be read or written
    #[error("Local cache error: {0}")]
    Io(#[from] std::io::Error),

    /// Cached or imported JSON could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core failure (configuration, validation)
    #[error(transparent)]
    Core(#[from] sfx_core::Error),

    /// No sound with this id
    #[error("Sound effect {0} not found")]
    NotFound(u32),

    /// Category name was blank
    #[error("Category name cannot be empty")]
    EmptyCategory,

    /// Category already exists
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    /// Import payload was not an array of sound effects
    #[error("{0}")]
    InvalidImport(String),

    /// The catalog already holds the highest possible id
    #[error("No sound effect ids left (highest id is {})", u32::MAX)]
    IdsExhausted,

    /// Neither the store nor the local cache has custom sounds
    #[error("No custom sound effects to export")]
    NothingToExport,
}

impl LibraryError {
    /// Whether the error came from the remote store and a local fallback may apply
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Offline)
    }

    /// Error code for programmatic handling and exit status
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Store(ApiError::NotConfigured) | Self::Offline => ErrorCode::StoreNotConfigured,
            Self::Store(_) => ErrorCode::StoreRequestFailed,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::InvalidFormat,
            Self::Core(e) => e.code,
            Self::NotFound(_) => ErrorCode::SoundNotFound,
            Self::EmptyCategory | Self::IdsExhausted => ErrorCode::InvalidInput,
            Self::DuplicateCategory(_) => ErrorCode::DuplicateCategory,
            Self::InvalidImport(_) => ErrorCode::InvalidImportFormat,
            Self::NothingToExport => ErrorCode::NothingToExport,
        }
    }

    /// Recovery hint for the operator, if there is one
    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Offline => Some("Set SUPABASE_URL and SUPABASE_ANON_KEY to sync with the remote store"),
            Self::NotFound(_) => Some("Run `sfx list` to see available ids"),
            Self::InvalidImport(_) => Some("Import files must contain a JSON array of sound effects"),
            Self::Core(e) => e.suggestion.as_deref(),
            _ => None,
        }
    }
}
