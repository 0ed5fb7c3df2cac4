//! Letter grid: positions, cells, team ownership and boards.
//!
//! The searches consume grids through the read-only `Grid` trait, so the
//! game-state layer can hand over its own storage. `Board` is the engine's
//! implementation, used by tests, generation and the Python bindings.

pub mod board;
pub mod cell;
pub mod generate;

pub use board::{Board, Grid};
pub use cell::{letter_score, Cell, CellPos, Connectivity, Relation, Team};
