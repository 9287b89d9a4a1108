//! Error types for the store client

use std::fmt;
use thiserror::Error;

/// Result type alias for store operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Store client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No store URL was configured
    #[error("Remote store is not configured")]
    NotConfigured,

    /// Store returned an error response
    #[error("Store error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from the store
        message: String,
    },

    /// Circuit breaker is open
    #[error("Circuit breaker is open - store temporarily unavailable")]
    CircuitOpen,

    /// Rate limited
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// All retry attempts exhausted
    #[error("All {attempts} retry attempts failed: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Last error message
        last_error: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            // connection errors and timeouts
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            // 5xx and 429
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::CircuitOpen
            | Self::RateLimited
            | Self::Config(_)
            | Self::NotConfigured
            | Self::Json(_)
            | Self::InvalidUrl(_)
            | Self::RetriesExhausted { .. } => false,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }
}

impl From<ApiError> for sfx_core::Error {
    fn from(err: ApiError) -> Self {
        use sfx_core::ErrorCode;

        let code = match &err {
            ApiError::NotConfigured => ErrorCode::StoreNotConfigured,
            ApiError::Config(_) | ApiError::InvalidUrl(_) => ErrorCode::InvalidConfigValue,
            ApiError::Json(_) => ErrorCode::InvalidFormat,
            _ => ErrorCode::StoreRequestFailed,
        };
        sfx_core::Error::new(code, err.to_string()).with_source(err)
    }
}

/// Error context for log lines
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Request ID for correlation
    pub request_id: Option<String>,
    /// Table or path that was called
    pub endpoint: String,
    /// HTTP method used
    pub method: String,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.endpoint)?;
        if let Some(ref id) = self.request_id {
            write!(f, " (request_id: {id})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(ApiError::api_response(503, "down").is_retryable());
        assert!(ApiError::api_response(429, "slow down").is_retryable());
        assert!(!ApiError::api_response(409, "conflict").is_retryable());
        assert!(!ApiError::CircuitOpen.is_retryable());
    }

    #[test]
    fn test_status_classes() {
        assert!(ApiError::api_response(404, "").is_client_error());
        assert!(ApiError::api_response(500, "").is_server_error());
        assert!(!ApiError::RateLimited.is_client_error());
    }

    #[test]
    fn test_into_core_error() {
        let err: sfx_core::Error = ApiError::NotConfigured.into();
        assert_eq!(err.code, sfx_core::ErrorCode::StoreNotConfigured);

        let err: sfx_core::Error = ApiError::api_response(500, "boom").into();
        assert_eq!(err.code, sfx_core::ErrorCode::StoreRequestFailed);
        assert!(err.message.contains("boom"));
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext {
            request_id: Some("abc".to_string()),
            endpoint: "sound_effects".to_string(),
            method: "POST".to_string(),
        };
        assert_eq!(ctx.to_string(), "POST sound_effects (request_id: abc)");
    }
}
