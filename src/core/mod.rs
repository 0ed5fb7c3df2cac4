//! Core engine types: configuration, errors, RNG.
//!
//! Everything else in the crate builds on these. The only outward reference
//! is `Error::OutOfBounds`, which carries a grid `CellPos`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_MIN_WORD_LENGTH};
pub use error::{Error, Result};
pub use rng::GameRng;
