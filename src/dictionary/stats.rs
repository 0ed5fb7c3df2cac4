//! Trie usage statistics for load-time diagnostics.

use serde::{Deserialize, Serialize};

use super::arena::{index_letter, letter_index, NodeId, ALPHABET};
use super::trie::Dictionary;

/// Child-slot occupancy for a group of nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotUsage {
    /// Nodes in the group.
    pub nodes: usize,

    /// Populated child slots across those nodes.
    pub used_slots: usize,
}

impl SlotUsage {
    /// Fraction of the group's child slots that are populated.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.used_slots as f64 / (self.nodes * ALPHABET) as f64
        }
    }

    fn record(&mut self, used: usize) {
        self.nodes += 1;
        self.used_slots += used;
    }
}

/// Occupancy of the trie's child slots, grouped by node letter and by depth.
///
/// Depth `n` holds the nodes ending an `n`-letter prefix; depth 0 is the root.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Total nodes visited, including the root.
    pub nodes: usize,

    /// Complete words found.
    pub words: usize,

    /// Occupancy indexed by letter (`A` = 0).
    pub by_letter: [SlotUsage; ALPHABET],

    /// Occupancy indexed by depth.
    pub by_depth: Vec<SlotUsage>,
}

impl UsageStats {
    /// Walk `dict` depth-first and tally every node.
    #[must_use]
    pub fn collect(dict: &Dictionary) -> Self {
        let mut stats = Self::default();
        let mut stack: Vec<(NodeId, usize)> = vec![(NodeId::ROOT, 0)];

        while let Some((id, depth)) = stack.pop() {
            let node = dict.node(id);
            let used = node.child_count();

            stats.nodes += 1;
            if node.terminal {
                stats.words += 1;
            }
            if stats.by_depth.len() <= depth {
                stats.by_depth.resize(depth + 1, SlotUsage::default());
            }
            stats.by_depth[depth].record(used);
            if let Some(index) = node.letter().and_then(letter_index) {
                stats.by_letter[index].record(used);
            }

            stack.extend(node.children().map(|child| (child, depth + 1)));
        }

        stats
    }

    /// Overall fraction of child slots in use.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        let total = SlotUsage {
            nodes: self.nodes,
            used_slots: self.by_depth.iter().map(|d| d.used_slots).sum(),
        };
        total.fill_ratio()
    }

    /// Length of the longest stored prefix.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.by_depth.len().saturating_sub(1)
    }

    /// Per-letter occupancy paired with its letter, skipping unused letters.
    pub fn letters(&self) -> impl Iterator<Item = (char, SlotUsage)> + '_ {
        self.by_letter
            .iter()
            .enumerate()
            .filter(|(_, usage)| usage.nodes > 0)
            .map(|(i, usage)| (index_letter(i), *usage))
    }
}
