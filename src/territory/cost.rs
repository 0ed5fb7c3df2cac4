//! Lexicographic path cost.

use serde::{Deserialize, Serialize};

use crate::grid::Relation;

/// Tally of the cells a path crosses, seen from one team.
///
/// Field order is the comparison order: any path through fewer enemy cells
/// is better, then fewer neutral cells, then fewer ally cells. The derived
/// `Ord` relies on this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathCost {
    pub enemy: u32,
    pub neutral: u32,
    pub ally: u32,
}

impl PathCost {
    /// The empty path.
    pub const ZERO: PathCost = PathCost::new(0, 0, 0);

    /// Sentinel for "no path"; compares greater than every real cost.
    pub const INFINITE: PathCost = PathCost::new(u32::MAX, u32::MAX, u32::MAX);

    /// Create a cost from its components.
    #[must_use]
    pub const fn new(enemy: u32, neutral: u32, ally: u32) -> Self {
        Self { enemy, neutral, ally }
    }

    /// Cost of crossing a single cell.
    #[must_use]
    pub const fn of(relation: Relation) -> Self {
        match relation {
            Relation::Enemy => Self::new(1, 0, 0),
            Relation::Neutral => Self::new(0, 1, 0),
            Relation::Ally => Self::new(0, 0, 1),
        }
    }

    /// This cost extended by one more cell.
    #[must_use]
    pub fn step(self, relation: Relation) -> Self {
        self + Self::of(relation)
    }

    /// Optimistic completion: assume every one of `remaining` further cells
    /// is an ally. Never overestimates any component.
    #[must_use]
    pub fn estimate(self, remaining: u32) -> Self {
        Self {
            ally: self.ally.saturating_add(remaining),
            ..self
        }
    }

    /// Check for the unreachable sentinel.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITE
    }

    /// True for a reachable, ally-only path.
    #[must_use]
    pub fn is_bridge(&self) -> bool {
        !self.is_infinite() && self.enemy == 0 && self.neutral == 0
    }

    /// Number of cells crossed, `None` for the sentinel.
    #[must_use]
    pub fn cells(&self) -> Option<usize> {
        (!self.is_infinite())
            .then(|| self.enemy as usize + self.neutral as usize + self.ally as usize)
    }
}

impl Default for PathCost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for PathCost {
    type Output = PathCost;

    fn add(self, rhs: PathCost) -> PathCost {
        PathCost {
            enemy: self.enemy.saturating_add(rhs.enemy),
            neutral: self.neutral.saturating_add(rhs.neutral),
            ally: self.ally.saturating_add(rhs.ally),
        }
    }
}

impl std::fmt::Display for PathCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_infinite() {
            write!(f, "PathCost(unreachable)")
        } else {
            write!(f, "PathCost(enemy={}, neutral={}, ally={})", self.enemy, self.neutral, self.ally)
        }
    }
}
