//! Dictionary bindings for Python.

use std::fs::File;
use std::io::BufReader;

use pyo3::prelude::*;

use super::value_error;
use crate::core::{EngineConfig, Error};
use crate::dictionary::Dictionary;

/// Python wrapper for Dictionary.
#[pyclass(name = "Dictionary")]
pub struct PyDictionary(pub Dictionary);

#[pymethods]
impl PyDictionary {
    /// Build a dictionary from a list of words.
    ///
    /// Malformed words are skipped.
    #[new]
    fn new(words: Vec<String>) -> Self {
        Self(Dictionary::from_words(words))
    }

    /// Load a newline-delimited word list.
    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        let file = File::open(path).map_err(|e| value_error(Error::Io(e)))?;
        let (dict, _report) =
            Dictionary::from_reader(BufReader::new(file), &EngineConfig::default()).map_err(value_error)?;
        Ok(Self(dict))
    }

    /// Insert a word. Returns False if it was rejected as malformed.
    fn add(&mut self, word: &str) -> bool {
        self.0.add(word)
    }

    /// Shrink the node arena once loading is done.
    fn trim(&mut self) {
        self.0.trim();
    }

    /// Check if `prefix` starts at least one word.
    fn contains_prefix(&self, prefix: &str) -> bool {
        self.0.contains_prefix(prefix)
    }

    /// Number of distinct words.
    #[getter]
    fn word_count(&self) -> usize {
        self.0.word_count()
    }

    /// Number of trie nodes, root included.
    #[getter]
    fn node_count(&self) -> usize {
        self.0.node_count()
    }

    fn __contains__(&self, word: &str) -> bool {
        self.0.has_word(word)
    }

    fn __len__(&self) -> usize {
        self.0.word_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "Dictionary(words={}, nodes={})",
            self.0.word_count(),
            self.0.node_count()
        )
    }
}
