//! Open set for the territory search.
//!
//! A min-queue on estimated cost over `BinaryHeap`. Entries are never
//! updated in place: an improved cell is pushed again and the outdated entry
//! is recognised and skipped when it surfaces.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::cost::PathCost;
use crate::grid::CellPos;

/// One queued cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenEntry {
    /// Estimated total cost through this cell when it was queued.
    pub estimate: PathCost,

    /// Insertion order; earlier entries win ties.
    pub seq: u64,

    pub pos: CellPos,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the cheapest (then oldest) entry
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of cells keyed by estimated cost.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `pos` with the given estimate.
    pub fn push(&mut self, pos: CellPos, estimate: PathCost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenEntry { estimate, seq, pos });
    }

    /// Remove the cheapest entry; among equals, the earliest pushed.
    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    /// Number of queued entries, including outdated ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total entries ever pushed.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.next_seq
    }
}
