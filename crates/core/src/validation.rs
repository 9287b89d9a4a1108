//! Input validation
//!
//! Fluent field checks used by the sound-effect editor and the import path.
//!
//! # Example
//!
//! ```rust
//! use sfx_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("name", "Rain")
//!     .hex_color("icon.color", "#00bcd4")
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

/// A single failed check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Machine-readable code
    pub code: String,
    /// Offending value, when useful
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convert to Result type
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
#[derive(Default)]
pub struct Validator {
    result: ValidationResult,
}

impl Validator {
    /// Create a new validator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(mut self, field: &str, code: &str, message: String, actual: Option<String>) -> Self {
        self.result.add_error(ValidationError {
            field: field.to_string(),
            message,
            code: code.to_string(),
            actual,
        });
        self
    }

    /// Value must contain something other than whitespace
    #[must_use]
    pub fn required(self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.fail(field, "REQUIRED", "Field is required".to_string(), None)
        } else {
            self
        }
    }

    /// Value must be a `#rgb` or `#rrggbb` color
    #[must_use]
    pub fn hex_color(self, field: &str, value: &str) -> Self {
        if HEX_COLOR.is_match(value) {
            self
        } else {
            self.fail(
                field,
                "PATTERN",
                "Must be a hex color like #4a6cf7".to_string(),
                Some(value.to_string()),
            )
        }
    }

    /// Complete validation and return result
    #[must_use]
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validation() {
        let result = Validator::new().required("name", "   ").validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "REQUIRED");
    }

    #[test]
    fn test_hex_color() {
        assert!(Validator::new().hex_color("c", "#fff").validate().is_valid());
        assert!(Validator::new().hex_color("c", "#4A6CF7").validate().is_valid());
        assert!(!Validator::new().hex_color("c", "blue").validate().is_valid());
        assert!(!Validator::new().hex_color("c", "#12345").validate().is_valid());
    }

    #[test]
    fn test_into_result_joins_messages() {
        let err = Validator::new()
            .required("name", "")
            .required("category", "")
            .validate()
            .into_result()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("name"));
        assert!(err.message.contains("category"));
    }

    #[test]
    fn test_failures_keep_the_offending_value() {
        let result = Validator::new()
            .required("name", "Rain")
            .hex_color("icon.color", "teal")
            .validate();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "icon.color");
        assert_eq!(result.errors()[0].actual.as_deref(), Some("teal"));
    }
}
