//! Word dictionary: an arena-backed trie with immutable cursors.
//!
//! ## Overview
//!
//! - **`Dictionary`**: insertion, whole-word lookup, trimming and usage stats
//! - **`Cursor`**: `Copy` handle that walks the trie one letter at a time
//! - **`DictionaryLoader`**: batched, abortable population from a word list
//!
//! A round keeps two independent dictionaries: the good-word list used for
//! hints and validation, and a banned-word list that filters it.
//!
//! ## Lifecycle
//!
//! 1. Create empty (`Dictionary::new` / `with_config`)
//! 2. Populate through `add`, usually driven by a `DictionaryLoader`
//! 3. `trim()` (the loader does this on completion)
//! 4. Read-only from then on; share freely across threads

pub mod arena;
pub mod cursor;
pub mod loader;
pub mod stats;
pub mod trie;

pub use arena::{NodeId, ALPHABET};
pub use cursor::Cursor;
pub use loader::{AbortHandle, DictionaryLoader, LoadProgress, LoadReport, WordList};
pub use stats::{SlotUsage, UsageStats};
pub use trie::Dictionary;
