//! Configuration for the store client
//!
//! Built from the `[store]` section of `sfx.toml` (after environment
//! overrides), with retry and rate-limit profiles chosen by environment.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use sfx_core::config::StoreConfig;
use sfx_core::rate_limit::RateLimitConfig;
use sfx_core::retry::RetryConfig;
use std::env;
use std::time::Duration;

/// Path of the PostgREST API under a Supabase project URL
const REST_PATH: &str = "rest/v1";

/// Environment types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (typically localhost Supabase)
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    #[default]
    Production,
}

impl Environment {
    /// Parse from the `SFX_ENV` environment variable
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(&env::var("SFX_ENV").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }

    fn retry(self) -> RetryConfig {
        match self {
            Self::Development => RetryConfig::quick(),
            Self::Staging => RetryConfig::default(),
            Self::Production => RetryConfig::patient(),
        }
    }

    fn rate_limit(self) -> RateLimitConfig {
        match self {
            Self::Development => RateLimitConfig::per_minute(1000),
            Self::Staging => RateLimitConfig::per_minute(200),
            Self::Production => RateLimitConfig::per_minute(100),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Supabase project URL, without the REST path
    pub base_url: String,
    /// Anonymous key, sent as `apikey` and as the bearer token
    pub anon_key: Option<String>,
    /// Table holding sound-effect rows
    pub table: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Retry configuration
    pub retry: RetryConfig,
    /// Rate limit configuration
    pub rate_limit: RateLimitConfig,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl ClientConfig {
    /// Create configuration for a project URL, using the current environment's
    /// retry and rate-limit profile
    pub fn new(base_url: impl Into<String>) -> Self {
        let environment = Environment::from_env();
        Self {
            base_url: base_url.into(),
            anon_key: None,
            table: "sound_effects".to_string(),
            timeout: Duration::from_secs(30),
            retry: environment.retry(),
            rate_limit: environment.rate_limit(),
            environment,
        }
    }

    /// Create configuration from the `[store]` config section
    ///
    /// Fails with [`ApiError::NotConfigured`] when no URL is set.
    pub fn from_store(store: &StoreConfig) -> ApiResult<Self> {
        let url = store
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ApiError::NotConfigured)?;

        let mut config = Self::new(url)
            .with_table(store.table.clone())
            .with_timeout(Duration::from_secs(store.timeout_secs));
        config.anon_key = store.anon_key.clone();
        Ok(config)
    }

    /// Create development configuration (local Supabase)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            anon_key: env::var("SUPABASE_ANON_KEY").ok(),
            table: "sound_effects".to_string(),
            timeout: Duration::from_secs(10),
            retry: Environment::Development.retry(),
            rate_limit: Environment::Development.rate_limit(),
            environment: Environment::Development,
        }
    }

    /// REST endpoint for the configured table
    #[must_use]
    pub fn table_url(&self) -> String {
        format!(
            "{}/{REST_PATH}/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }

    /// Builder-style method to set anon key
    #[must_use]
    pub fn with_anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    /// Builder-style method to set the table
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set retry config
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Builder-style method to set rate limit config
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.table.trim().is_empty() {
            return Err(ApiError::config("table cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("dev"), Environment::Development);
        assert_eq!(Environment::parse("STAGING"), Environment::Staging);
        assert_eq!(Environment::parse(""), Environment::Production);
    }

    #[test]
    fn test_development_config() {
        let config = ClientConfig::development();
        assert!(config.base_url.contains("localhost"));
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_store() {
        let store = StoreConfig {
            url: Some("https://abc.supabase.co/".to_string()),
            anon_key: Some("anon".to_string()),
            table: "sfx".to_string(),
            timeout_secs: 5,
        };
        let config = ClientConfig::from_store(&store).unwrap();
        assert_eq!(config.anon_key.as_deref(), Some("anon"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.table_url(), "https://abc.supabase.co/rest/v1/sfx");
    }

    #[test]
    fn test_from_store_requires_url() {
        let store = StoreConfig::default();
        assert!(matches!(
            ClientConfig::from_store(&store),
            Err(ApiError::NotConfigured)
        ));

        let blank = StoreConfig {
            url: Some("  ".to_string()),
            ..StoreConfig::default()
        };
        assert!(ClientConfig::from_store(&blank).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::new("https://abc.supabase.co").validate().is_ok());
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("ftp://abc").validate().is_err());
        assert!(ClientConfig::new("https://abc.supabase.co")
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
