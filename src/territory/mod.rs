//! Territory path finding and win detection.
//!
//! ## Overview
//!
//! Team A bridges from the leftmost column to the rightmost, team B the
//! other way. A path is scored by `PathCost`, the (enemy, neutral, ally)
//! tally of the cells it crosses, compared lexicographically. A team wins
//! when its cheapest path has no enemy and no neutral cells.
//!
//! ## Usage
//!
//! ```
//! use word_bridge::{best_path, Board, Grid, Team};
//!
//! let board = Board::from_rows(&["CAT", "DOG", "PIG"]).unwrap()
//!     .with_owners(&["A..", "AAA", "..B"]).unwrap();
//!
//! let result = best_path(&board, Team::A);
//! assert!(result.is_bridge());
//! assert_eq!(result.path.len(), board.width());
//! ```

pub mod cost;
pub mod finder;
pub mod frontier;
pub mod outcome;

pub use cost::PathCost;
pub use finder::{best_path, has_bridge, TerritoryPath};
pub use frontier::{Frontier, OpenEntry};
pub use outcome::RoundOutcome;
