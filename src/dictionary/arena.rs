//! Arena-backed trie node storage.
//!
//! Nodes live in a flat `Vec<TrieNode>` and refer to each other by `NodeId`
//! index. Nodes are only ever appended, so an id handed out once stays valid
//! for the lifetime of the arena.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of letters in the trie alphabet (`A..=Z`).
pub const ALPHABET: usize = 26;

/// Map a character to its child slot, folding ASCII lowercase to uppercase.
///
/// Anything outside `A..=Z` / `a..=z` has no slot.
#[inline]
#[must_use]
pub fn letter_index(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Inverse of `letter_index`.
#[inline]
#[must_use]
pub fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET);
    (b'A' + index as u8) as char
}

/// Unique identifier for a node within one arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node, present in every arena.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the root node.
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single trie node.
///
/// Child slots hold raw ids with `0` meaning "absent"; the root is never
/// anyone's child, so id 0 is free to act as the sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode {
    /// Uppercase ASCII letter for this edge, `0` for the root.
    letter: u8,

    /// True if the path from the root spells a complete word.
    pub terminal: bool,

    /// Owning node. `None` only for the root.
    pub parent: Option<NodeId>,

    children: [u32; ALPHABET],
}

impl TrieNode {
    /// The root node.
    #[must_use]
    pub fn root() -> Self {
        Self {
            letter: 0,
            terminal: false,
            parent: None,
            children: [0; ALPHABET],
        }
    }

    /// A fresh child node for `letter_index` under `parent`.
    #[must_use]
    pub fn new(parent: NodeId, letter_index: usize) -> Self {
        Self {
            letter: b'A' + letter_index as u8,
            terminal: false,
            parent: Some(parent),
            children: [0; ALPHABET],
        }
    }

    /// The letter this node represents, `None` for the root.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        (self.letter != 0).then_some(self.letter as char)
    }

    /// Child in slot `index`, if present.
    #[inline]
    #[must_use]
    pub fn child(&self, index: usize) -> Option<NodeId> {
        match self.children[index] {
            0 => None,
            id => Some(NodeId(id)),
        }
    }

    /// Number of populated child slots.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|&&c| c != 0).count()
    }

    /// Iterate over populated children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().filter(|&&c| c != 0).map(|&c| NodeId(c))
    }

    fn set_child(&mut self, index: usize, child: NodeId) {
        debug_assert!(!child.is_root(), "root cannot be a child");
        self.children[index] = child.0;
    }
}

/// Growable node arena.
///
/// Starts at a minimum capacity and doubles when full; `trim` releases the
/// unused tail once loading is done.
#[derive(Clone, Debug)]
pub struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    /// Create an arena holding only the root, with room for `min_capacity` nodes.
    #[must_use]
    pub fn new(min_capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(min_capacity.max(1));
        nodes.push(TrieNode::root());
        Self { nodes }
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    /// Follow (or create) the edge `letter_index` out of `parent`.
    pub fn child_or_insert(&mut self, parent: NodeId, letter_index: usize) -> NodeId {
        if let Some(existing) = self.get(parent).child(letter_index) {
            return existing;
        }
        let id = self.alloc(TrieNode::new(parent, letter_index));
        self.get_mut(parent).set_child(letter_index, id);
        id
    }

    fn alloc(&mut self, node: TrieNode) -> NodeId {
        if self.nodes.len() == self.nodes.capacity() {
            let old = self.nodes.capacity();
            self.nodes.reserve_exact(old);
            debug!(from = old, to = self.nodes.capacity(), "trie arena grown");
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Shrink storage to exactly the nodes in use.
    pub fn trim(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// An arena always contains its root, so this is never true.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node slots currently reserved.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Bytes reserved for node storage.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.nodes.capacity() * std::mem::size_of::<TrieNode>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index('q'), Some(16));
        assert_eq!(letter_index('-'), None);
        assert_eq!(letter_index('é'), None);
        assert_eq!(index_letter(2), 'C');
    }

    #[test]
    fn test_arena_new() {
        let arena = NodeArena::new(4);
        assert_eq!(arena.len(), 1);
        assert!(arena.capacity() >= 4);
        assert_eq!(arena.get(NodeId::ROOT).letter(), None);
        assert!(arena.get(NodeId::ROOT).parent.is_none());
    }

    #[test]
    fn test_child_or_insert_reuses_edges() {
        let mut arena = NodeArena::new(4);
        let a = arena.child_or_insert(NodeId::ROOT, 0);
        let again = arena.child_or_insert(NodeId::ROOT, 0);

        assert_eq!(a, again);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).letter(), Some('A'));
        assert_eq!(arena.get(a).parent, Some(NodeId::ROOT));
        assert_eq!(arena.get(NodeId::ROOT).child(0), Some(a));
        assert_eq!(arena.get(NodeId::ROOT).child_count(), 1);
    }

    #[test]
    fn test_growth_doubles() {
        let mut arena = NodeArena::new(2);
        let start = arena.capacity();
        let mut parent = NodeId::ROOT;
        for _ in 0..start {
            parent = arena.child_or_insert(parent, 1);
        }
        assert!(arena.capacity() >= start * 2);
        assert_eq!(arena.len(), start + 1);
    }

    #[test]
    fn test_trim() {
        let mut arena = NodeArena::new(256);
        arena.child_or_insert(NodeId::ROOT, 3);
        arena.trim();
        assert_eq!(arena.len(), 2);
        assert!(arena.capacity() < 256);
        assert_eq!(arena.memory_bytes(), arena.capacity() * std::mem::size_of::<TrieNode>());
    }

    #[test]
    fn test_children_in_order() {
        let mut arena = NodeArena::new(8);
        let z = arena.child_or_insert(NodeId::ROOT, 25);
        let b = arena.child_or_insert(NodeId::ROOT, 1);
        let kids: Vec<_> = arena.get(NodeId::ROOT).children().collect();
        assert_eq!(kids, vec![b, z]);
    }
}
