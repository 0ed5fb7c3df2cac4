//! Word search and territory bindings for Python.

use pyo3::prelude::*;

use super::py_board::{parse_team, to_positions, PyBoard};
use super::py_dictionary::PyDictionary;
use super::value_error;
use crate::search::WordFinder;
use crate::territory;

/// Every distinct good, non-banned word on the board, longest first.
#[pyfunction]
#[pyo3(signature = (good, banned, board, min_length = 3))]
pub fn find_words(good: &PyDictionary, banned: &PyDictionary, board: &PyBoard, min_length: usize) -> Vec<String> {
    WordFinder::new(&good.0, &banned.0)
        .with_min_length(min_length)
        .find_all(&board.0)
}

/// Check a submitted tile selection and return the word it spells.
///
/// Raises ValueError when the selection is not a legal play.
#[pyfunction]
#[pyo3(signature = (good, banned, board, path, min_length = 3))]
pub fn validate_selection(
    good: &PyDictionary,
    banned: &PyDictionary,
    board: &PyBoard,
    path: Vec<(i32, i32)>,
    min_length: usize,
) -> PyResult<String> {
    WordFinder::new(&good.0, &banned.0)
        .with_min_length(min_length)
        .validate_selection(&board.0, &to_positions(&path))
        .map_err(value_error)
}

/// Cheapest edge-to-edge path for a team.
///
/// Returns `(path, (enemy, neutral, ally))`, or None when no path exists.
#[pyfunction]
#[allow(clippy::type_complexity)]
pub fn best_path(board: &PyBoard, team: &str) -> PyResult<Option<(Vec<(i32, i32)>, (u32, u32, u32))>> {
    let result = territory::best_path(&board.0, parse_team(team)?);
    if !result.is_reachable() {
        return Ok(None);
    }
    let path = result.path.iter().map(|p| (p.x, p.y)).collect();
    let cost = (result.cost.enemy, result.cost.neutral, result.cost.ally);
    Ok(Some((path, cost)))
}
