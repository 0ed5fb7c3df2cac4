//! The word dictionary: a trie packed into a node arena.

use tracing::info;

use super::arena::{letter_index, NodeArena, NodeId, TrieNode};
use super::cursor::Cursor;
use super::stats::UsageStats;
use crate::core::EngineConfig;

/// In-memory word dictionary.
///
/// Populated once through `add` (usually via a `DictionaryLoader`), trimmed,
/// then only read. Reads take `&self` and writes take `&mut self`, so a
/// dictionary shared between threads is necessarily finished loading.
///
/// ```
/// use word_bridge::Dictionary;
///
/// let mut dict = Dictionary::new();
/// dict.add("bridge");
/// dict.trim();
///
/// assert!(dict.has_word("BRIDGE"));
/// assert!(dict.has_word("bridge"));
/// assert!(!dict.has_word("brid"));
/// ```
#[derive(Clone, Debug)]
pub struct Dictionary {
    arena: NodeArena,
    word_count: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary with the default arena capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Create an empty dictionary sized by `config.arena_min_capacity`.
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self::with_capacity(config.arena_min_capacity)
    }

    /// Create an empty dictionary with room for `nodes` nodes before growing.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            arena: NodeArena::new(nodes),
            word_count: 0,
        }
    }

    /// Build a finished (trimmed) dictionary from a list of words.
    ///
    /// Malformed entries are skipped, exactly as `add` does.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            dict.add(word.as_ref());
        }
        dict.trim();
        dict
    }

    /// Insert a word.
    ///
    /// The word is matched case-insensitively and stored uppercase. Words
    /// that are empty or contain anything outside ASCII letters are rejected
    /// before any node is created; the return value is `false` for those and
    /// `true` once the word is present. Re-adding a word is a no-op.
    pub fn add(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(|c| letter_index(c).is_some()) {
            return false;
        }

        let mut node = NodeId::ROOT;
        for c in word.chars() {
            if let Some(index) = letter_index(c) {
                node = self.arena.child_or_insert(node, index);
            }
        }

        let end = self.arena.get_mut(node);
        if !end.terminal {
            end.terminal = true;
            self.word_count += 1;
        }
        true
    }

    /// Check whether `word` is a complete dictionary word (case-insensitive).
    #[must_use]
    pub fn has_word(&self, word: &str) -> bool {
        self.find(word)
            .map(|node| self.arena.get(node).terminal)
            .unwrap_or(false)
    }

    /// Check whether any dictionary word starts with `prefix`.
    ///
    /// The empty prefix matches as long as the dictionary holds a word.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        match self.find(prefix) {
            Some(node) if node.is_root() => !self.is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    fn find(&self, text: &str) -> Option<NodeId> {
        text.chars().try_fold(NodeId::ROOT, |node, c| {
            letter_index(c).and_then(|index| self.arena.get(node).child(index))
        })
    }

    /// A cursor positioned at the root.
    #[must_use]
    pub fn search(&self) -> Cursor<'_> {
        Cursor::root(self)
    }

    /// Release unused arena capacity once loading is complete.
    pub fn trim(&mut self) {
        let before = self.arena.memory_bytes();
        self.arena.trim();
        info!(
            words = self.word_count,
            nodes = self.arena.len(),
            bytes = self.arena.memory_bytes(),
            released = before - self.arena.memory_bytes(),
            "dictionary trimmed"
        );
    }

    /// Tally populated child slots per letter and per depth.
    ///
    /// Diagnostic only; walks the whole trie.
    #[must_use]
    pub fn usage_stats(&self) -> UsageStats {
        UsageStats::collect(self)
    }

    /// Number of distinct words stored.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True if no word has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of trie nodes, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Node slots currently reserved.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Bytes reserved for node storage.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.arena.memory_bytes()
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        self.arena.get(id)
    }
}
