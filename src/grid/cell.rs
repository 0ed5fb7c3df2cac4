//! Grid cells, positions and team ownership.

use serde::{Deserialize, Serialize};

/// Grid coordinates. `x` grows to the right, `y` grows downward.
///
/// Signed so that neighbour offsets can step off the board and simply
/// miss instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// True if `other` is one of the 8 surrounding cells.
    #[must_use]
    pub fn touches(self, other: CellPos) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which neighbours count as adjacent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Up, down, left, right. Used for territory.
    Four,
    /// Orthogonal plus diagonal. Used for spelling words.
    Eight,
}

impl Connectivity {
    /// Neighbour offsets in a fixed order (row by row, left to right).
    #[must_use]
    pub fn offsets(self) -> &'static [(i32, i32)] {
        const FOUR: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
        #[rustfmt::skip]
        const EIGHT: [(i32, i32); 8] = [
            (-1, -1), (0, -1), (1, -1),
            (-1, 0),           (1, 0),
            (-1, 1),  (0, 1),  (1, 1),
        ];
        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}

/// One of the two competing teams.
///
/// Team `A` builds from the leftmost column to the rightmost; team `B`
/// builds the other way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Both teams, in order.
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    /// Column this team's bridge starts from.
    #[must_use]
    pub fn start_column(self, width: usize) -> i32 {
        match self {
            Team::A => 0,
            Team::B => width as i32 - 1,
        }
    }

    /// Column this team's bridge must reach.
    #[must_use]
    pub fn goal_column(self, width: usize) -> i32 {
        self.opponent().start_column(width)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => write!(f, "Team A"),
            Team::B => write!(f, "Team B"),
        }
    }
}

/// A cell's ownership as seen by one team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Ally,
    Enemy,
    Neutral,
}

impl Relation {
    /// Classify `owner` from `viewer`'s point of view.
    #[must_use]
    pub fn of(owner: Option<Team>, viewer: Team) -> Relation {
        match owner {
            Some(team) if team == viewer => Relation::Ally,
            Some(_) => Relation::Enemy,
            None => Relation::Neutral,
        }
    }
}

/// Points a tile is worth when captured.
///
/// Rare letters score higher; "Qu" scores as a Q.
#[must_use]
pub fn letter_score(letters: &str) -> u32 {
    match letters.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U') => 1,
        Some('D' | 'G') => 2,
        Some('B' | 'C' | 'M' | 'P') => 3,
        Some('F' | 'H' | 'V' | 'W' | 'Y') => 4,
        Some('K') => 5,
        Some('J' | 'X') => 8,
        Some('Q' | 'Z') => 10,
        _ => 0,
    }
}

/// A single board tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Where the tile sits.
    pub pos: CellPos,

    /// Tile text: one letter, or two for "Qu".
    pub letters: String,

    /// Owning team, `None` while neutral.
    pub owner: Option<Team>,

    /// Capture score.
    pub score: u32,
}

impl Cell {
    /// Create a neutral cell scored by `letter_score`.
    pub fn new(pos: CellPos, letters: impl Into<String>) -> Self {
        let letters = letters.into();
        let score = letter_score(&letters);
        Self {
            pos,
            letters,
            owner: None,
            score,
        }
    }

    /// Set the owning team.
    #[must_use]
    pub fn with_owner(mut self, owner: Team) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Ownership relative to `viewer`.
    #[must_use]
    pub fn relation(&self, viewer: Team) -> Relation {
        Relation::of(self.owner, viewer)
    }
}
