//! Round win detection.

use serde::{Deserialize, Serialize};

use super::finder::best_path;
use crate::grid::{Grid, Team};

/// State of a round after a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Neither team has a bridge yet.
    InProgress,
    /// Exactly one team has a bridge.
    Won(Team),
    /// Both teams completed a bridge at once (they cross in different rows).
    Tied,
}

impl RoundOutcome {
    /// Evaluate both teams on `grid`.
    ///
    /// Run after every capture that changes ownership.
    ///
    /// ```
    /// use word_bridge::{Board, RoundOutcome, Team};
    ///
    /// let board = Board::from_rows(&["ABC", "DEF"]).unwrap()
    ///     .with_owners(&["BBB", "A.A"]).unwrap();
    /// assert_eq!(RoundOutcome::evaluate(&board), RoundOutcome::Won(Team::B));
    /// ```
    #[must_use]
    pub fn evaluate<G: Grid + ?Sized>(grid: &G) -> Self {
        let a = best_path(grid, Team::A).is_bridge();
        let b = best_path(grid, Team::B).is_bridge();
        match (a, b) {
            (true, true) => RoundOutcome::Tied,
            (true, false) => RoundOutcome::Won(Team::A),
            (false, true) => RoundOutcome::Won(Team::B),
            (false, false) => RoundOutcome::InProgress,
        }
    }

    /// Check if the round is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// The winning team, if exactly one.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        match self {
            RoundOutcome::Won(team) => Some(*team),
            _ => None,
        }
    }
}
