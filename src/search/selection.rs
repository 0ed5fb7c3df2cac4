//! Validation of a player's submitted tile selection.

use rustc_hash::FxHashSet;

use super::words::WordFinder;
use crate::core::{Error, Result};
use crate::grid::{CellPos, Grid};

impl WordFinder<'_> {
    /// Check a submitted selection and return the word it spells.
    ///
    /// The positions must form a simple 8-connected path over existing
    /// cells, and spell a good, non-banned word of at least `min_length`
    /// letters.
    ///
    /// ```
    /// use word_bridge::{Board, CellPos, Dictionary, Error, WordFinder};
    ///
    /// let good = Dictionary::from_words(["cat"]);
    /// let banned = Dictionary::new();
    /// let board = Board::from_rows(&["CAT"]).unwrap();
    /// let finder = WordFinder::new(&good, &banned);
    ///
    /// let path = [CellPos::new(0, 0), CellPos::new(1, 0), CellPos::new(2, 0)];
    /// assert_eq!(finder.validate_selection(&board, &path).unwrap(), "CAT");
    ///
    /// let skip = [CellPos::new(0, 0), CellPos::new(2, 0)];
    /// assert!(matches!(finder.validate_selection(&board, &skip), Err(Error::InvalidSelection(_))));
    /// ```
    pub fn validate_selection<G: Grid + ?Sized>(&self, grid: &G, path: &[CellPos]) -> Result<String> {
        if path.is_empty() {
            return Err(Error::invalid_selection("empty selection"));
        }

        let mut seen = FxHashSet::default();
        let mut word = String::new();
        for (i, &pos) in path.iter().enumerate() {
            let cell = grid.cell(pos).ok_or(Error::OutOfBounds(pos))?;
            if !seen.insert(pos) {
                return Err(Error::invalid_selection(format!("cell {} selected twice", pos)));
            }
            if i > 0 && !path[i - 1].touches(pos) {
                return Err(Error::invalid_selection(format!(
                    "cells {} and {} are not adjacent",
                    path[i - 1],
                    pos
                )));
            }
            word.push_str(&cell.letters.to_ascii_uppercase());
        }

        if word.len() < self.min_length() {
            return Err(Error::TooShort {
                word,
                min: self.min_length(),
            });
        }
        if !self.good().has_word(&word) {
            return Err(Error::UnknownWord(word));
        }
        if self.banned().has_word(&word) {
            return Err(Error::BannedWord(word));
        }
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::grid::Board;

    fn setup() -> (Dictionary, Dictionary, Board) {
        let good = Dictionary::from_words(["QUIT", "TIE", "TIES", "SIT"]);
        let banned = Dictionary::from_words(["ties"]);
        // Qu I T
        // S  E X
        let board = Board::from_rows(&["QuIT", "SEX"]).unwrap();
        (good, banned, board)
    }

    fn p(x: i32, y: i32) -> CellPos {
        CellPos::new(x, y)
    }

    #[test]
    fn test_valid_selection() {
        let (good, banned, board) = setup();
        let finder = WordFinder::new(&good, &banned);

        assert_eq!(finder.validate_selection(&board, &[p(0, 0), p(1, 0), p(2, 0)]).unwrap(), "QUIT");
        assert_eq!(finder.validate_selection(&board, &[p(2, 0), p(1, 0), p(1, 1)]).unwrap(), "TIE");
    }

    #[test]
    fn test_banned_and_unknown() {
        let (good, banned, board) = setup();
        let finder = WordFinder::new(&good, &banned);

        let ties = [p(2, 0), p(1, 0), p(1, 1), p(0, 1)];
        assert!(matches!(finder.validate_selection(&board, &ties), Err(Error::BannedWord(w)) if w == "TIES"));

        let sex = [p(0, 1), p(1, 1), p(2, 1)];
        assert!(matches!(finder.validate_selection(&board, &sex), Err(Error::UnknownWord(_))));
    }

    #[test]
    fn test_structural_errors() {
        let (good, banned, board) = setup();
        let finder = WordFinder::new(&good, &banned);

        assert!(matches!(finder.validate_selection(&board, &[]), Err(Error::InvalidSelection(_))));
        assert!(matches!(
            finder.validate_selection(&board, &[p(0, 0), p(5, 0)]),
            Err(Error::OutOfBounds(_))
        ));
        assert!(matches!(
            finder.validate_selection(&board, &[p(1, 0), p(1, 1), p(1, 0)]),
            Err(Error::InvalidSelection(_))
        ));
        assert!(matches!(
            finder.validate_selection(&board, &[p(0, 1), p(2, 0), p(1, 0)]),
            Err(Error::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_too_short() {
        let (good, banned, board) = setup();
        let finder = WordFinder::new(&good, &banned);

        let err = finder.validate_selection(&board, &[p(1, 0), p(2, 0)]).unwrap_err();
        assert!(matches!(err, Error::TooShort { min: 3, .. }));
    }
}
