//! Error types for word-bridge.
//!
//! Lookups, word search and path finding are total and never produce these;
//! errors only come from the outer surfaces (loading, board construction,
//! selection validation).

use thiserror::Error;

use crate::grid::CellPos;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Engine error type
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a word list failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Board rows or tiles could not be turned into a rectangular grid
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// A position outside the board
    #[error("Out of bounds: {0}")]
    OutOfBounds(CellPos),

    /// A tile selection that is not a simple 8-connected path
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Selection spells a word missing from the dictionary
    #[error("Unknown word: {0}")]
    UnknownWord(String),

    /// Selection spells a word on the block list
    #[error("Banned word: {0}")]
    BannedWord(String),

    /// Selection spells a word below the minimum length
    #[error("Word too short: {word} (minimum {min})")]
    TooShort { word: String, min: usize },

    /// A dictionary load was aborted before completion
    #[error("Dictionary load aborted")]
    LoadAborted,
}

impl Error {
    /// Create an invalid board error
    pub fn invalid_board(msg: impl Into<String>) -> Self {
        Error::InvalidBoard(msg.into())
    }

    /// Create an invalid selection error
    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Error::InvalidSelection(msg.into())
    }
}
