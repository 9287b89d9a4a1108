//! Error types for the search crate.
//!
//! Searching itself never fails; errors only arise when decoding items that
//! arrive as JSON (the WASM bindings and other foreign callers).

use crate::item::SearchItem;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur at the JSON boundary.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Items payload was not a JSON array of items
    #[error("Invalid items payload: {0}")]
    InvalidItems(#[from] serde_json::Error),
}

/// Decode a JSON array of items.
///
/// Missing `description` fields decode as empty strings.
pub fn parse_items(json: &str) -> Result<Vec<SearchItem>> {
    Ok(serde_json::from_str(json)?)
}
