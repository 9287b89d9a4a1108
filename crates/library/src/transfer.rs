//! JSON import/export of sound collections.

use crate::error::{LibraryError, Result};
use crate::model::SoundEffect;
use serde_json::Value;

/// Error text for payloads that are not a JSON array
pub const EXPECTED_ARRAY: &str = "Invalid format: expected an array";

/// Serialize sounds as a pretty-printed JSON array
pub fn export_json(sounds: &[SoundEffect]) -> Result<String> {
    Ok(serde_json::to_string_pretty(sounds)?)
}

/// Parse an import payload
///
/// The payload must be a JSON array whose elements are sound objects;
/// `description` may be missing or null.
pub fn parse_import(json: &str) -> Result<Vec<SoundEffect>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| LibraryError::InvalidImport(format!("Invalid JSON: {e}")))?;

    let Value::Array(elements) = value else {
        return Err(LibraryError::InvalidImport(EXPECTED_ARRAY.to_string()));
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value(element).map_err(|e| {
                LibraryError::InvalidImport(format!("Invalid sound effect at index {index}: {e}"))
            })
        })
        .collect()
}
