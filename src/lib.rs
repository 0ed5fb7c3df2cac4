//! # word-bridge
//!
//! Adjudication engine for a grid-based word-capture game.
//!
//! ## Design Principles
//!
//! 1. **Total Queries**: Lookups, word search and path finding never fail;
//!    missing edges, out-of-bounds cells and unreachable goals are ordinary
//!    empty results.
//!
//! 2. **Load Once, Read Forever**: Dictionaries are built by a single writer,
//!    trimmed, then shared read-only.
//!
//! 3. **Grid Agnostic**: Searches read through the `Grid` trait; the
//!    game-state layer keeps ownership of its board.
//!
//! ## Architecture
//!
//! - **Arena Trie**: Nodes live in a flat `Vec` and refer to each other by
//!   index. Nodes are only appended, never unlinked.
//!
//! - **Value Cursors**: `Cursor` is `Copy`; the backtracking word search
//!   keeps one per path cell without any shared mutable state.
//!
//! - **Lexicographic A\***: Territory paths minimise (enemy, neutral, ally)
//!   crossings in that order.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, deterministic RNG
//! - `dictionary`: Trie, cursor, usage stats, incremental loader
//! - `grid`: Cells, teams, the `Grid` trait and `Board`
//! - `search`: Adjacency word search and selection validation
//! - `territory`: Path cost, A* path finder, win detection

pub mod core;
pub mod dictionary;
pub mod grid;
pub mod search;
pub mod territory;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{EngineConfig, Error, GameRng, Result};

pub use crate::dictionary::{
    AbortHandle, Cursor, Dictionary, DictionaryLoader, LoadProgress, LoadReport, NodeId,
    SlotUsage, UsageStats,
};

pub use crate::grid::{Board, Cell, CellPos, Connectivity, Grid, Relation, Team};

pub use crate::search::{FoundWord, WordFinder};

pub use crate::territory::{best_path, has_bridge, PathCost, RoundOutcome, TerritoryPath};
