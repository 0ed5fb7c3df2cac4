//! Seeded random board generation.

use im::Vector;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::board::Board;
use super::cell::{Cell, CellPos, Team};
use crate::core::GameRng;

/// Approximate English letter frequencies (per mille), `A` through `Z`.
const LETTER_WEIGHTS: [f32; 26] = [
    82.0, 15.0, 28.0, 43.0, 127.0, 22.0, 20.0, 61.0, 70.0, 2.0, 8.0, 40.0, 24.0,
    67.0, 75.0, 19.0, 1.0, 60.0, 63.0, 91.0, 28.0, 10.0, 24.0, 2.0, 20.0, 1.0,
];

fn tile_text(index: usize) -> String {
    match (b'A' + index as u8) as char {
        'Q' => "Qu".to_string(),
        c => c.to_string(),
    }
}

impl Board {
    /// Generate a neutral board with frequency-weighted letters.
    ///
    /// Each call advances `rng` by one round, so successive boards from one
    /// session differ.
    /// A drawn `Q` always becomes a "Qu" tile. Returns `None` for a zero
    /// dimension.
    ///
    /// ```
    /// use word_bridge::{Board, GameRng, Grid};
    ///
    /// let a = Board::random(5, 4, &mut GameRng::new(7)).unwrap();
    /// let b = Board::random(5, 4, &mut GameRng::new(7)).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.cells().count(), 20);
    /// ```
    pub fn random(width: usize, height: usize, rng: &mut GameRng) -> Option<Self> {
        generate(width, height, rng.next_round(), false)
    }

    /// Generate a board whose cells are each owned by A, B or nobody with
    /// equal probability.
    pub fn random_territory(width: usize, height: usize, rng: &mut GameRng) -> Option<Self> {
        generate(width, height, rng.next_round(), true)
    }
}

fn generate(width: usize, height: usize, round: GameRng, owned: bool) -> Option<Board> {
    if width == 0 || height == 0 {
        return None;
    }
    let weights = WeightedIndex::new(LETTER_WEIGHTS).ok()?;
    let mut letters = round.stream("letters");
    let mut owners = round.stream("owners");

    let mut cells = Vector::new();
    for y in 0..height {
        for x in 0..width {
            let mut cell = Cell::new(CellPos::new(x as i32, y as i32), tile_text(weights.sample(&mut letters)));
            if owned {
                cell.owner = match owners.gen_range(0..3) {
                    0 => Some(Team::A),
                    1 => Some(Team::B),
                    _ => None,
                };
            }
            cells.push_back(cell);
        }
    }
    Some(Board::from_cells(width, height, cells))
}
