//! Configuration loading and schema definitions
//!
//! Settings come from an optional `sfx.toml` file, then environment variables
//! override individual fields.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
