//! A* search for the cheapest edge-to-edge path.
//!
//! Seeds every cell of the team's start column at once, moves 4-connected,
//! and stops at the first dequeued cell in the goal column. The estimate
//! adds the remaining column distance to the ally count only; it never
//! overestimates and never decreases along a step, so the first goal cell
//! dequeued carries the optimal cost.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::cost::PathCost;
use super::frontier::Frontier;
use crate::grid::{CellPos, Connectivity, Grid, Team};

/// The cheapest path found for a team, start column first.
///
/// `path.len()` always equals the number of cells tallied in `cost`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryPath {
    /// Cells from the start column to the goal column, inclusive.
    pub path: Vec<CellPos>,

    /// Realised cost of `path`, or `PathCost::INFINITE` if none exists.
    pub cost: PathCost,
}

impl TerritoryPath {
    /// The result when the goal column cannot be reached.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: PathCost::INFINITE,
        }
    }

    /// Check if a path exists.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.cost.is_infinite()
    }

    /// True if the path is an unbroken ally bridge.
    #[must_use]
    pub fn is_bridge(&self) -> bool {
        self.cost.is_bridge()
    }

    /// Number of cells on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Check if the path is empty (only when unreachable).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Best known way to reach a cell.
#[derive(Clone, Copy, Debug)]
struct Visit {
    cost: PathCost,
    estimate: PathCost,
    parent: Option<CellPos>,
}

/// Find the cheapest path across `grid` for `team`.
///
/// ```
/// use word_bridge::{best_path, Board, PathCost, Team};
///
/// let board = Board::from_rows(&["ABC", "DEF"]).unwrap()
///     .with_owners(&["AAA", "B.."]).unwrap();
///
/// let result = best_path(&board, Team::A);
/// assert_eq!(result.cost, PathCost::new(0, 0, 3));
/// assert!(result.is_bridge());
/// ```
pub fn best_path<G: Grid + ?Sized>(grid: &G, team: Team) -> TerritoryPath {
    let width = grid.width();
    if width == 0 || grid.height() == 0 {
        return TerritoryPath::unreachable();
    }

    let start_column = team.start_column(width);
    let goal_column = team.goal_column(width);
    let remaining = |pos: CellPos| (goal_column - pos.x).unsigned_abs();

    let mut visits: FxHashMap<CellPos, Visit> = FxHashMap::default();
    let mut frontier = Frontier::new();

    for y in 0..grid.height() as i32 {
        let pos = CellPos::new(start_column, y);
        let Some(cell) = grid.cell(pos) else {
            continue;
        };
        let cost = PathCost::of(cell.relation(team));
        let estimate = cost.estimate(remaining(pos));
        visits.insert(pos, Visit { cost, estimate, parent: None });
        frontier.push(pos, estimate);
    }

    let mut expanded = 0usize;
    while let Some(entry) = frontier.pop() {
        let current = visits[&entry.pos];
        if entry.estimate != current.estimate {
            // superseded by a cheaper route pushed later
            continue;
        }
        if entry.pos.x == goal_column {
            trace!(%team, expanded, pushed = frontier.pushed(), "territory path found");
            return TerritoryPath {
                path: reconstruct(&visits, entry.pos),
                cost: current.cost,
            };
        }
        expanded += 1;

        for next in grid.neighbors(entry.pos, Connectivity::Four) {
            let Some(cell) = grid.cell(next) else {
                continue;
            };
            let cost = current.cost.step(cell.relation(team));
            let improved = visits.get(&next).map_or(true, |known| cost < known.cost);
            if improved {
                let estimate = cost.estimate(remaining(next));
                visits.insert(
                    next,
                    Visit {
                        cost,
                        estimate,
                        parent: Some(entry.pos),
                    },
                );
                frontier.push(next, estimate);
            }
        }
    }

    trace!(%team, expanded, "territory goal unreachable");
    TerritoryPath::unreachable()
}

/// Follow parent links back to the start column; returns start-first order.
fn reconstruct(visits: &FxHashMap<CellPos, Visit>, goal: CellPos) -> Vec<CellPos> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = visits.get(&current).and_then(|v| v.parent) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// True if `team` has an unbroken ally bridge between its two edges.
#[must_use]
pub fn has_bridge<G: Grid + ?Sized>(grid: &G, team: Team) -> bool {
    best_path(grid, team).is_bridge()
}
