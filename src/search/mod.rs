//! Adjacency word search over a letter grid.
//!
//! `WordFinder` pairs the good-word and banned-word dictionaries and answers
//! two questions for the game-state layer:
//!
//! - which words can be spelled starting from a given tile (hint lists)
//! - whether a submitted tile selection spells an acceptable word
//!
//! Both are pure functions of the grid and the dictionaries. Each call owns
//! its own visited set, so calls may run concurrently.

pub mod selection;
pub mod words;

pub use words::{FoundWord, WordFinder, WordPath};
