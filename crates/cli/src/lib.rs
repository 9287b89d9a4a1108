//! Terminal helpers for the sound-effect library CLI
//!
//! Provides shared CLI functionality:
//! - Output format selection (text or JSON)
//! - Status messages and text formatting
//! - Spinners for store round-trips

#![warn(missing_docs)]

pub mod output;
pub mod progress;

pub use output::{OutputFormat, Status};
