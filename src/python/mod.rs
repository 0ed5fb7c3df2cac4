//! Python bindings for the word-bridge engine.
//!
//! # Quick Start
//!
//! ```python
//! import word_bridge as wb
//!
//! good = wb.Dictionary.from_file("words.txt")
//! banned = wb.Dictionary([])
//!
//! board = wb.Board(["CAT", "DOG", "PIG"], owners=["A..", "AAA", "..B"])
//! words = wb.find_words(good, banned, board)
//!
//! path, cost = wb.best_path(board, "A")
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_dictionary;
mod py_search;

pub use py_board::*;
pub use py_dictionary::*;
pub use py_search::*;

/// Map an engine error onto a Python `ValueError`.
pub(crate) fn value_error(err: crate::core::Error) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// word_bridge: dictionary, word search and territory engine.
///
/// This module provides:
/// - Dictionary loading and lookup
/// - Boards with team ownership
/// - Adjacency word search and selection validation
/// - Territory path finding and round evaluation
#[pymodule]
fn word_bridge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDictionary>()?;
    m.add_class::<PyBoard>()?;

    m.add_function(wrap_pyfunction!(find_words, m)?)?;
    m.add_function(wrap_pyfunction!(validate_selection, m)?)?;
    m.add_function(wrap_pyfunction!(best_path, m)?)?;

    Ok(())
}
