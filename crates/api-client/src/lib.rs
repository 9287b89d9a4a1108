//! Client for the remote sound-effect row store
//!
//! This crate provides a resilient HTTP client for a Supabase (PostgREST)
//! table holding each owner's custom sound effects.
//!
//! # Features
//!
//! - **Config-driven**: built from the `[store]` section of `sfx.toml`
//! - **Retry with exponential backoff**: Automatic retry for transient failures
//! - **Circuit breaker**: Stop calling the store during outages
//! - **Rate limiting**: Keep bulk imports under backend throttling limits
//! - **Request correlation**: Track requests with unique IDs for debugging
//!
//! # Example
//!
//! ```rust,no_run
//! use sfx_api_client::{ClientConfig, StoreClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://abc.supabase.co").with_anon_key("anon-key");
//!     let client = StoreClient::with_config(config)?;
//!
//!     let rows = client.sound_effects().list_for_owner("owner-id").await?;
//!     println!("{} custom sounds", rows.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::StoreClient;
pub use config::{ClientConfig, Environment};
pub use endpoints::{SoundEffectRow, SoundEffectsApi};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::StoreClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{SoundEffectRow, SoundEffectsApi};
    pub use crate::error::{ApiError, ApiResult};
}
