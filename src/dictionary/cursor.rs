//! Immutable navigation handle into a `Dictionary`.
//!
//! A `Cursor` is a `Copy` value: stepping to a child or parent returns a new
//! cursor and never touches the one it came from. The word search holds one
//! cursor per grid cell on the current path and relies on this.
//!
//! ```
//! use word_bridge::Dictionary;
//!
//! let dict = Dictionary::from_words(["tea", "ten"]);
//! let te = dict.search().walk("TE").unwrap();
//!
//! let tea = te.child('a').unwrap();
//! let ten = te.child('N').unwrap();
//!
//! assert!(tea.is_terminator() && ten.is_terminator());
//! assert!(!te.is_terminator());
//! assert_eq!(tea.current_word(), "TEA");
//! assert_eq!(ten.parent(), Some(te));
//! ```

use std::fmt;

use super::arena::{letter_index, NodeId, TrieNode};
use super::trie::Dictionary;

/// Position in a dictionary trie.
///
/// The spelled word is not stored; it is recovered from parent links on
/// demand, which keeps the cursor two words wide.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    dict: &'a Dictionary,
    node: NodeId,
    depth: u32,
}

impl<'a> Cursor<'a> {
    /// A cursor at the root of `dict`.
    #[must_use]
    pub fn root(dict: &'a Dictionary) -> Self {
        Self {
            dict,
            node: NodeId::ROOT,
            depth: 0,
        }
    }

    #[inline]
    fn trie_node(&self) -> &'a TrieNode {
        self.dict.node(self.node)
    }

    /// The node this cursor points at.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Number of letters between the root and here.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth as usize
    }

    /// True at the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node.is_root()
    }

    /// True if the spelled word is a complete dictionary word.
    #[must_use]
    pub fn is_terminator(&self) -> bool {
        self.trie_node().terminal
    }

    /// True if at least one longer word continues from here.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.trie_node().child_count() > 0
    }

    /// The letter of the current node, `None` at the root.
    #[must_use]
    pub fn current_letter(&self) -> Option<char> {
        self.trie_node().letter()
    }

    /// The uppercase string spelled from the root to here.
    #[must_use]
    pub fn current_word(&self) -> String {
        let mut letters = Vec::with_capacity(self.depth());
        let mut node = self.trie_node();
        while let (Some(letter), Some(parent)) = (node.letter(), node.parent) {
            letters.push(letter);
            node = self.dict.node(parent);
        }
        letters.iter().rev().collect()
    }

    /// Step along the edge for `letter` (case-insensitive).
    #[must_use]
    pub fn child(&self, letter: char) -> Option<Self> {
        let index = letter_index(letter)?;
        let node = self.trie_node().child(index)?;
        Some(Self {
            dict: self.dict,
            node,
            depth: self.depth + 1,
        })
    }

    /// Step back one letter, `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let node = self.trie_node().parent?;
        Some(Self {
            dict: self.dict,
            node,
            depth: self.depth - 1,
        })
    }

    /// Step through every character of `text`, e.g. both letters of a "Qu" tile.
    #[must_use]
    pub fn walk(&self, text: &str) -> Option<Self> {
        text.chars().try_fold(*self, |cursor, c| cursor.child(c))
    }

    /// Cursors for every populated child, in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = Cursor<'a>> + 'a {
        let dict = self.dict;
        let depth = self.depth + 1;
        self.trie_node()
            .children()
            .map(move |node| Cursor { dict, node, depth })
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dict, other.dict) && self.node == other.node
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("node", &self.node)
            .field("word", &self.current_word())
            .field("terminator", &self.is_terminator())
            .finish()
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({})", self.current_word())
    }
}
