//! Engine configuration.
//!
//! The surrounding game decides word-length rules and how aggressively the
//! dictionary loads; the engine never hardcodes them beyond the defaults here.

use serde::{Deserialize, Serialize};

/// Shortest word the adjacency search reports by default.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum length (in letters) of a word found on the board.
    /// A "Qu" tile contributes two letters.
    pub min_word_length: usize,

    /// Words inserted per `DictionaryLoader::step` call.
    /// Smaller batches return control to the caller more often.
    pub load_batch_size: usize,

    /// Initial node slots reserved by a new dictionary arena.
    pub arena_min_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            load_batch_size: 512,
            arena_min_capacity: 1024,
        }
    }
}

impl EngineConfig {
    /// Set the minimum reported word length.
    #[must_use]
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Set the loader batch size (clamped to at least one word).
    #[must_use]
    pub fn with_load_batch_size(mut self, size: usize) -> Self {
        self.load_batch_size = size.max(1);
        self
    }

    /// Set the initial arena capacity (clamped to at least the root node).
    #[must_use]
    pub fn with_arena_capacity(mut self, capacity: usize) -> Self {
        self.arena_min_capacity = capacity.max(1);
        self
    }
}
