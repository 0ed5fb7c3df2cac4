//! The grid accessor trait and the engine's own rectangular board.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, CellPos, Connectivity, Team};
use crate::core::{Error, Result};

/// Read-only access to a rectangular letter grid.
///
/// This is the seam to the game-state layer: searches only ever read
/// through it, and anything outside `0..width` x `0..height` is absent.
pub trait Grid {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// The cell at `pos`, or `None` when out of bounds.
    fn cell(&self, pos: CellPos) -> Option<&Cell>;

    /// Check if `pos` lies on the grid.
    fn in_bounds(&self, pos: CellPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width() && (pos.y as usize) < self.height()
    }

    /// In-bounds neighbours of `pos`, in the fixed order of `conn.offsets()`.
    fn neighbors(&self, pos: CellPos, conn: Connectivity) -> SmallVec<[CellPos; 8]> {
        conn.offsets()
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|&p| self.in_bounds(p))
            .collect()
    }
}

/// A rectangular board stored row-major.
///
/// Cells live in a persistent `im::Vector`, so cloning a board to keep a
/// snapshot is O(1) and later ownership changes only copy the touched chunk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Build a board from row-major tile texts.
    ///
    /// Positions and scores are filled in; every cell starts neutral.
    pub fn from_letters<S: Into<String>>(width: usize, height: usize, letters: Vec<S>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_board("board must have at least one row and column"));
        }
        if letters.len() != width * height {
            return Err(Error::invalid_board(format!(
                "expected {} tiles for {}x{}, got {}",
                width * height,
                width,
                height,
                letters.len()
            )));
        }

        let mut cells = Vector::new();
        for (i, text) in letters.into_iter().enumerate() {
            let text = text.into();
            if !is_tile_text(&text) {
                return Err(Error::invalid_board(format!("unusable tile text {:?}", text)));
            }
            let pos = CellPos::new((i % width) as i32, (i / width) as i32);
            cells.push_back(Cell::new(pos, text));
        }

        Ok(Self { width, height, cells })
    }

    /// Parse a board from text rows, one character per tile.
    ///
    /// A `Q` followed by `u` becomes the single tile "Qu". Whitespace is
    /// ignored, so `"C A T"` and `"CAT"` are the same row.
    ///
    /// ```
    /// use word_bridge::{Board, CellPos, Grid};
    ///
    /// let board = Board::from_rows(&["QuIT", "SET"]).unwrap();
    /// assert_eq!(board.width(), 3);
    /// assert_eq!(board.cell(CellPos::new(0, 0)).unwrap().letters, "Qu");
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let parsed: Vec<Vec<String>> = rows.iter().map(|row| split_tiles(row)).collect();
        let width = parsed.first().map_or(0, Vec::len);
        if let Some((y, row)) = parsed.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::invalid_board(format!(
                "row {} has {} tiles, expected {}",
                y,
                row.len(),
                width
            )));
        }
        Self::from_letters(width, parsed.len(), parsed.into_iter().flatten().collect())
    }

    /// Assign owners from text rows: `A` / `B` for a team, anything else neutral.
    pub fn with_owners(mut self, rows: &[&str]) -> Result<Self> {
        if rows.len() != self.height {
            return Err(Error::invalid_board(format!(
                "expected {} ownership rows, got {}",
                self.height,
                rows.len()
            )));
        }
        for (y, row) in rows.iter().enumerate() {
            let marks: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if marks.len() != self.width {
                return Err(Error::invalid_board(format!(
                    "ownership row {} has {} marks, expected {}",
                    y,
                    marks.len(),
                    self.width
                )));
            }
            for (x, mark) in marks.into_iter().enumerate() {
                let owner = match mark {
                    'A' | 'a' => Some(Team::A),
                    'B' | 'b' => Some(Team::B),
                    _ => None,
                };
                self.set_owner(CellPos::new(x as i32, y as i32), owner)?;
            }
        }
        Ok(self)
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Change a cell's owner.
    pub fn set_owner(&mut self, pos: CellPos, owner: Option<Team>) -> Result<()> {
        let index = self.index(pos).ok_or(Error::OutOfBounds(pos))?;
        self.cells[index].owner = owner;
        Ok(())
    }

    /// Give every listed cell to `team`, e.g. after a successful capture.
    pub fn capture(&mut self, path: &[CellPos], team: Team) -> Result<()> {
        if let Some(&bad) = path.iter().find(|&&p| !self.in_bounds(p)) {
            return Err(Error::OutOfBounds(bad));
        }
        for &pos in path {
            self.set_owner(pos, Some(team))?;
        }
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells owned by `team`.
    #[must_use]
    pub fn owned_by(&self, team: Team) -> usize {
        self.cells.iter().filter(|c| c.owner == Some(team)).count()
    }

    /// Mirror left-to-right and swap the two teams' ownership.
    ///
    /// Team B on the mirrored board faces exactly what team A faced here.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut cells = Vector::new();
        for y in 0..self.height {
            for x in (0..self.width).rev() {
                let mut cell = self.cells[y * self.width + x].clone();
                cell.pos = CellPos::new((self.width - 1 - x) as i32, y as i32);
                cell.owner = cell.owner.map(Team::opponent);
                cells.push_back(cell);
            }
        }
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Assemble a board from already-positioned cells (row-major).
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vector<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }
}

impl Grid for Board {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell(&self, pos: CellPos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            let row: Vec<String> = (0..self.width)
                .map(|x| {
                    let cell = &self.cells[y * self.width + x];
                    let mark = match cell.owner {
                        Some(Team::A) => 'a',
                        Some(Team::B) => 'b',
                        None => '.',
                    };
                    format!("{:<2}{}", cell.letters, mark)
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// One ASCII letter, or "Qu" in any case.
fn is_tile_text(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => c.is_ascii_alphabetic(),
        (Some(q), Some(u), None) => q.eq_ignore_ascii_case(&'q') && u.eq_ignore_ascii_case(&'u'),
        _ => false,
    }
}

fn split_tiles(row: &str) -> Vec<String> {
    let mut tiles = Vec::new();
    let mut chars = row.chars().filter(|c| !c.is_whitespace()).peekable();
    while let Some(c) = chars.next() {
        if c.eq_ignore_ascii_case(&'q') && chars.peek().is_some_and(|u| u.eq_ignore_ascii_case(&'u')) {
            chars.next();
            tiles.push("Qu".to_string());
        } else {
            tiles.push(c.to_ascii_uppercase().to_string());
        }
    }
    tiles
}
