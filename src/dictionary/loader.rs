//! Incremental, abortable dictionary loading.
//!
//! A word list can hold hundreds of thousands of entries, so the loader
//! inserts a bounded batch per `step()` and hands control back to the caller
//! in between. An `AbortHandle` can stop the load from anywhere; since trie
//! nodes are only ever appended, a dictionary abandoned mid-load is still
//! consistent and can simply be dropped.
//!
//! ```
//! use word_bridge::{Dictionary, DictionaryLoader, EngineConfig, LoadProgress};
//!
//! let config = EngineConfig::default().with_load_batch_size(2);
//! let mut dict = Dictionary::with_config(&config);
//! let mut loader = DictionaryLoader::from_words(["ant", "bee", "cow", "doe"], &config);
//!
//! loop {
//!     match loader.step(&mut dict).unwrap() {
//!         LoadProgress::Pending { .. } => { /* yield to the game loop */ }
//!         LoadProgress::Complete(report) => {
//!             assert_eq!(report.accepted, 4);
//!             break;
//!         }
//!     }
//! }
//! assert!(dict.has_word("cow"));
//! ```

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::trie::Dictionary;
use crate::core::{EngineConfig, Error, Result};

/// Shared flag used to abort an in-progress load.
///
/// Cloning the handle shares the flag.
#[derive(Clone, Debug, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    /// Create a handle in the non-aborted state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the load stop before its next batch.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Has an abort been requested?
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Summary of a finished load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Entries inserted (including duplicates of earlier entries).
    pub accepted: usize,

    /// Entries skipped because they were not purely alphabetic.
    pub rejected: usize,

    /// Distinct words in the dictionary afterwards.
    pub words: usize,

    /// Trie nodes in the dictionary afterwards.
    pub nodes: usize,
}

/// Result of one loader step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadProgress {
    /// More entries remain; `loaded` counts entries processed so far.
    Pending { loaded: usize },

    /// The list is exhausted and the dictionary has been trimmed.
    Complete(LoadReport),
}

impl LoadProgress {
    /// Check if the load has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, LoadProgress::Complete(_))
    }
}

/// Streams newline-delimited word list entries into a `Dictionary`.
///
/// Entries are trimmed; blank lines are ignored and not reported.
pub struct DictionaryLoader<I> {
    lines: I,
    batch_size: usize,
    abort: AbortHandle,
    report: LoadReport,
    finished: bool,
}

impl<I, S> DictionaryLoader<I>
where
    I: Iterator<Item = std::io::Result<S>>,
    S: AsRef<str>,
{
    /// Create a loader over fallible lines, such as `BufRead::lines()`.
    pub fn new(lines: I, config: &EngineConfig) -> Self {
        Self {
            lines,
            batch_size: config.load_batch_size.max(1),
            abort: AbortHandle::new(),
            report: LoadReport::default(),
            finished: false,
        }
    }

    /// Share an existing abort flag, e.g. one owned by the game session.
    #[must_use]
    pub fn with_abort_handle(mut self, handle: AbortHandle) -> Self {
        self.abort = handle;
        self
    }

    /// Handle that aborts this load.
    #[must_use]
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    /// Insert up to one batch of entries.
    ///
    /// Every line read counts toward the batch, blank or not. A finished
    /// load keeps reporting `Complete` even after an abort.
    ///
    /// Returns `Err(Error::LoadAborted)` once aborted, and `Err(Error::Io)`
    /// if the underlying reader fails. Entries inserted before either error
    /// remain in `dict`.
    pub fn step(&mut self, dict: &mut Dictionary) -> Result<LoadProgress> {
        if self.finished {
            return Ok(LoadProgress::Complete(self.report.clone()));
        }
        if self.abort.is_aborted() {
            warn!(loaded = self.loaded(), "dictionary load aborted");
            return Err(Error::LoadAborted);
        }

        let mut batch_rejected = 0;
        let mut processed = 0;
        while processed < self.batch_size {
            let Some(line) = self.lines.next() else {
                self.finished = true;
                break;
            };
            let line = line?;
            processed += 1;
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if dict.add(word) {
                self.report.accepted += 1;
            } else {
                batch_rejected += 1;
            }
        }

        if batch_rejected > 0 {
            warn!(rejected = batch_rejected, "skipped malformed word list entries");
            self.report.rejected += batch_rejected;
        }

        if self.finished {
            dict.trim();
            self.report.words = dict.word_count();
            self.report.nodes = dict.node_count();
            info!(
                accepted = self.report.accepted,
                rejected = self.report.rejected,
                words = self.report.words,
                "dictionary load complete"
            );
            return Ok(LoadProgress::Complete(self.report.clone()));
        }

        debug!(loaded = self.loaded(), "dictionary batch loaded");
        Ok(LoadProgress::Pending {
            loaded: self.loaded(),
        })
    }

    /// Step until the list is exhausted.
    pub fn run(&mut self, dict: &mut Dictionary) -> Result<LoadReport> {
        loop {
            if let LoadProgress::Complete(report) = self.step(dict)? {
                return Ok(report);
            }
        }
    }

    /// Entries processed so far.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.report.accepted + self.report.rejected
    }
}

/// Adapts an in-memory word list to the loader's fallible line stream.
#[derive(Clone, Debug)]
pub struct WordList<I>(I);

impl<I: Iterator> Iterator for WordList<I> {
    type Item = std::io::Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Ok)
    }
}

impl<I> DictionaryLoader<WordList<I>>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Create a loader over an in-memory word list.
    pub fn from_words<W>(words: W, config: &EngineConfig) -> Self
    where
        W: IntoIterator<IntoIter = I>,
    {
        Self::new(WordList(words.into_iter()), config)
    }
}

impl<R: BufRead> DictionaryLoader<std::io::Lines<R>> {
    /// Create a loader over a newline-delimited reader.
    pub fn from_reader(reader: R, config: &EngineConfig) -> Self {
        Self::new(reader.lines(), config)
    }
}

impl Dictionary {
    /// Load a complete dictionary from a newline-delimited reader.
    pub fn from_reader<R: BufRead>(reader: R, config: &EngineConfig) -> Result<(Self, LoadReport)> {
        let mut dict = Self::with_config(config);
        let report = DictionaryLoader::from_reader(reader, config).run(&mut dict)?;
        Ok((dict, report))
    }
}
