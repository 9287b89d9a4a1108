//! Table-specific API implementations
//!
//! | Module | Table | Description |
//! |--------|-------|-------------|
//! | `sound_effects` | `sound_effects` | Custom sound-effect rows, scoped by owner |

pub mod sound_effects;

pub use sound_effects::{SoundEffectRow, SoundEffectsApi};
