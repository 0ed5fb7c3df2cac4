//! Board bindings for Python.

use pyo3::prelude::*;

use super::value_error;
use crate::core::GameRng;
use crate::grid::{Board, CellPos, Grid, Team};
use crate::territory::RoundOutcome;

/// Parse a team label ("A" or "B").
pub(crate) fn parse_team(label: &str) -> PyResult<Team> {
    match label {
        "A" | "a" => Ok(Team::A),
        "B" | "b" => Ok(Team::B),
        _ => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "unknown team {:?}, expected \"A\" or \"B\"",
            label
        ))),
    }
}

pub(crate) fn team_label(team: Team) -> &'static str {
    match team {
        Team::A => "A",
        Team::B => "B",
    }
}

pub(crate) fn to_positions(path: &[(i32, i32)]) -> Vec<CellPos> {
    path.iter().map(|&(x, y)| CellPos::new(x, y)).collect()
}

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create a board from text rows, optionally with an ownership overlay.
    ///
    /// # Arguments
    /// - rows: One string per row; "Qu" is a single tile
    /// - owners: One string per row of 'A', 'B' or '.'
    #[new]
    #[pyo3(signature = (rows, owners = None))]
    fn new(rows: Vec<String>, owners: Option<Vec<String>>) -> PyResult<Self> {
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let mut board = Board::from_rows(&rows).map_err(value_error)?;
        if let Some(owners) = owners {
            let owners: Vec<&str> = owners.iter().map(String::as_str).collect();
            board = board.with_owners(&owners).map_err(value_error)?;
        }
        Ok(Self(board))
    }

    /// Generate a random board from a seed.
    #[staticmethod]
    #[pyo3(signature = (width, height, seed = 42, territory = false))]
    fn random(width: usize, height: usize, seed: u64, territory: bool) -> PyResult<Self> {
        let mut rng = GameRng::new(seed);
        let board = if territory {
            Board::random_territory(width, height, &mut rng)
        } else {
            Board::random(width, height, &mut rng)
        };
        board
            .map(Self)
            .ok_or_else(|| PyErr::new::<pyo3::exceptions::PyValueError, _>("board must not be empty"))
    }

    #[getter]
    fn width(&self) -> usize {
        self.0.width()
    }

    #[getter]
    fn height(&self) -> usize {
        self.0.height()
    }

    /// Tile text at (x, y), or None when out of bounds.
    fn letters(&self, x: i32, y: i32) -> Option<String> {
        self.0.cell(CellPos::new(x, y)).map(|c| c.letters.clone())
    }

    /// Owning team at (x, y), or None for neutral / out of bounds.
    fn owner(&self, x: i32, y: i32) -> Option<&'static str> {
        self.0
            .cell(CellPos::new(x, y))
            .and_then(|c| c.owner)
            .map(team_label)
    }

    /// Number of cells owned by a team.
    fn owned_by(&self, team: &str) -> PyResult<usize> {
        Ok(self.0.owned_by(parse_team(team)?))
    }

    /// Hand every cell on `path` to `team`.
    fn capture(&mut self, path: Vec<(i32, i32)>, team: &str) -> PyResult<()> {
        let team = parse_team(team)?;
        self.0.capture(&to_positions(&path), team).map_err(value_error)
    }

    /// Round state: None while in progress, "A" / "B" for a winner, "tie".
    fn outcome(&self) -> Option<&'static str> {
        match RoundOutcome::evaluate(&self.0) {
            RoundOutcome::InProgress => None,
            RoundOutcome::Won(team) => Some(team_label(team)),
            RoundOutcome::Tied => Some("tie"),
        }
    }

    /// Copy the board (O(1), cells are shared until modified).
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!("Board({}x{})", self.0.width(), self.0.height())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }
}
