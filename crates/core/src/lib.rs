//! Core utilities for the sound-effect library
//!
//! This crate provides shared functionality used by the store client, the
//! library service and the command-line front end:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with environment overrides
//! - **Resilience**: retry backoff, circuit breaker and rate limiting for remote calls
//! - **Validation**: field checks for sound-effect forms
//!
//! # Example
//!
//! ```rust,no_run
//! use sfx_core::config::Config;
//!
//! let config = Config::load(None).expect("config");
//! println!("suggestions: {}", config.schema.search.suggestion_limit);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod rate_limit;
pub mod retry;
pub mod validation;

pub use error::{Error, ErrorCode, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result};
    pub use crate::rate_limit::{RateLimitConfig, RateLimiter};
    pub use crate::retry::{CircuitBreaker, RetryConfig};
    pub use crate::validation::{ValidationResult, Validator};
}
