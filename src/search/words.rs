//! Adjacency word search.
//!
//! Backtracking depth-first search from one starting cell. Each step moves to
//! one of the 8 surrounding cells, a cell is used at most once per path, and
//! the trie cursor is advanced by the cell's letters as the path grows. A
//! branch is dropped as soon as the cursor has nowhere to go.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineConfig, DEFAULT_MIN_WORD_LENGTH};
use crate::dictionary::{Cursor, Dictionary};
use crate::grid::{CellPos, Connectivity, Grid};

/// Tile path for one word; most words fit inline.
pub type WordPath = SmallVec<[CellPos; 8]>;

/// A word found on the board together with one path that spells it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    /// The uppercase word.
    pub word: String,

    /// The first path (in search order) that spells `word`, start cell first.
    pub path: WordPath,
}

/// Finds dictionary words reachable from a grid cell.
///
/// ```
/// use word_bridge::{Board, CellPos, Dictionary, WordFinder};
///
/// let good = Dictionary::from_words(["cat", "act", "tact", "at"]);
/// let banned = Dictionary::from_words(["act"]);
/// let board = Board::from_rows(&["CAT", "XTX"]).unwrap();
///
/// let finder = WordFinder::new(&good, &banned);
/// // "AT" is too short and "ACT" is banned
/// assert_eq!(finder.find_from(&board, CellPos::new(0, 0)), vec!["CAT"]);
/// assert_eq!(finder.find_from(&board, CellPos::new(2, 0)), vec!["TACT"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WordFinder<'d> {
    good: &'d Dictionary,
    banned: &'d Dictionary,
    min_length: usize,
}

impl<'d> WordFinder<'d> {
    /// Create a finder reporting words of at least three letters.
    #[must_use]
    pub fn new(good: &'d Dictionary, banned: &'d Dictionary) -> Self {
        Self {
            good,
            banned,
            min_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }

    /// Create a finder using `config.min_word_length`.
    #[must_use]
    pub fn with_config(good: &'d Dictionary, banned: &'d Dictionary, config: &EngineConfig) -> Self {
        Self::new(good, banned).with_min_length(config.min_word_length)
    }

    /// Set the minimum word length.
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Minimum word length reported.
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// The good-word dictionary.
    #[must_use]
    pub fn good(&self) -> &'d Dictionary {
        self.good
    }

    /// The banned-word dictionary.
    #[must_use]
    pub fn banned(&self) -> &'d Dictionary {
        self.banned
    }

    /// Words spellable from `start`, longest first, ties alphabetical.
    ///
    /// A start outside the grid, or one whose letters begin no word,
    /// yields an empty list.
    pub fn find_from<G: Grid + ?Sized>(&self, grid: &G, start: CellPos) -> Vec<String> {
        self.find_paths_from(grid, start)
            .into_iter()
            .map(|found| found.word)
            .collect()
    }

    /// Like `find_from`, but keeps one spelling path per word.
    pub fn find_paths_from<G: Grid + ?Sized>(&self, grid: &G, start: CellPos) -> Vec<FoundWord> {
        let mut walk = Walk::new(grid, self.min_length);
        walk.visit(start, self.good.search());

        let mut words: Vec<FoundWord> = walk
            .found
            .into_iter()
            .filter(|(word, _)| !self.banned.has_word(word))
            .map(|(word, path)| FoundWord { word, path })
            .collect();
        words.sort_by(|a, b| rank(&a.word, &b.word));
        words
    }

    /// Every distinct word spellable anywhere on the grid, in `find_from` order.
    pub fn find_all<G: Grid + ?Sized>(&self, grid: &G) -> Vec<String> {
        let mut all = FxHashSet::default();
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                all.extend(self.find_from(grid, CellPos::new(x, y)));
            }
        }
        let mut words: Vec<String> = all.into_iter().collect();
        words.sort_by(|a, b| rank(a, b));
        words
    }
}

/// Longest first, then alphabetical.
fn rank(a: &str, b: &str) -> std::cmp::Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

/// State for one search call; never shared between calls.
struct Walk<'g, G: ?Sized> {
    grid: &'g G,
    min_length: usize,
    path: WordPath,
    visited: FxHashSet<CellPos>,
    found: FxHashMap<String, WordPath>,
}

impl<'g, G: Grid + ?Sized> Walk<'g, G> {
    fn new(grid: &'g G, min_length: usize) -> Self {
        Self {
            grid,
            min_length,
            path: WordPath::new(),
            visited: FxHashSet::default(),
            found: FxHashMap::default(),
        }
    }

    fn visit(&mut self, pos: CellPos, cursor: Cursor<'_>) {
        let Some(cell) = self.grid.cell(pos) else {
            return;
        };
        let Some(next) = cursor.walk(&cell.letters) else {
            return;
        };

        self.path.push(pos);
        if next.is_terminator() && next.depth() >= self.min_length {
            let path = &self.path;
            self.found
                .entry(next.current_word())
                .or_insert_with(|| path.clone());
        }

        if next.has_children() {
            self.visited.insert(pos);
            for neighbor in self.grid.neighbors(pos, Connectivity::Eight) {
                if !self.visited.contains(&neighbor) {
                    self.visit(neighbor, next);
                }
            }
            self.visited.remove(&pos);
        }
        self.path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Board;

    fn dicts(good: &[&str], banned: &[&str]) -> (Dictionary, Dictionary) {
        (Dictionary::from_words(good), Dictionary::from_words(banned))
    }

    #[test]
    fn test_diagonal_and_bent_paths() {
        let (good, banned) = dicts(&["CAB", "CUE", "BED"], &[]);
        // C A X
        // U B X
        // X E D
        let board = Board::from_rows(&["CAX", "UBX", "XED"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        assert_eq!(finder.find_from(&board, CellPos::new(0, 0)), vec!["CAB", "CUE"]);
        assert_eq!(finder.find_from(&board, CellPos::new(1, 1)), vec!["BED"]);
    }

    #[test]
    fn test_no_cell_reuse() {
        let (good, banned) = dicts(&["ABA", "ABAB"], &[]);
        let board = Board::from_rows(&["AB"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        assert!(finder.find_from(&board, CellPos::new(0, 0)).is_empty());

        let wider = Board::from_rows(&["ABA"]).unwrap();
        assert_eq!(finder.find_from(&wider, CellPos::new(0, 0)), vec!["ABA"]);
    }

    #[test]
    fn test_min_length() {
        let (good, banned) = dicts(&["AT", "ATE"], &[]);
        let board = Board::from_rows(&["ATE"]).unwrap();

        let finder = WordFinder::new(&good, &banned);
        assert_eq!(finder.find_from(&board, CellPos::new(0, 0)), vec!["ATE"]);

        let loose = finder.with_min_length(2);
        assert_eq!(loose.find_from(&board, CellPos::new(0, 0)), vec!["ATE", "AT"]);
    }

    #[test]
    fn test_qu_tile_advances_twice() {
        let (good, banned) = dicts(&["QUIT", "QIT"], &[]);
        let board = Board::from_rows(&["QuIT"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        assert_eq!(finder.find_from(&board, CellPos::new(0, 0)), vec!["QUIT"]);
    }

    #[test]
    fn test_qu_counts_two_letters_toward_length() {
        let (good, banned) = dicts(&["QUA"], &[]);
        let board = Board::from_rows(&["QuA"]).unwrap();
        let finder = WordFinder::new(&good, &banned);
        assert_eq!(finder.find_from(&board, CellPos::new(0, 0)), vec!["QUA"]);
    }

    #[test]
    fn test_banned_words_removed() {
        let (good, banned) = dicts(&["DARN", "DARE", "RED"], &["darn"]);
        let board = Board::from_rows(&["DAR", "XEN"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        assert_eq!(finder.find_from(&board, CellPos::new(0, 0)), vec!["DARE"]);
    }

    #[test]
    fn test_ordering_longest_then_alphabetical() {
        let (good, banned) = dicts(&["TEA", "TEN", "TENT", "NET", "TEAT"], &[]);
        // T E A
        // N T X
        let board = Board::from_rows(&["TEA", "NTX"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        assert_eq!(
            finder.find_from(&board, CellPos::new(0, 0)),
            vec!["TEAT", "TENT", "TEA", "TEN"]
        );
    }

    #[test]
    fn test_duplicates_collapsed() {
        let (good, banned) = dicts(&["ABC"], &[]);
        // Two different B cells both lead to a C
        let board = Board::from_rows(&["AB", "BC"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        assert_eq!(finder.find_from(&board, CellPos::new(0, 0)), vec!["ABC"]);
    }

    #[test]
    fn test_dead_start_and_out_of_bounds() {
        let (good, banned) = dicts(&["CAT"], &[]);
        let board = Board::from_rows(&["ZCA", "XXT"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        assert!(finder.find_from(&board, CellPos::new(0, 0)).is_empty());
        assert!(finder.find_from(&board, CellPos::new(9, 9)).is_empty());
        assert!(finder.find_from(&board, CellPos::new(-1, 0)).is_empty());
    }

    #[test]
    fn test_empty_dictionary() {
        let (good, banned) = dicts(&[], &[]);
        let board = Board::from_rows(&["CAT"]).unwrap();
        assert!(WordFinder::new(&good, &banned).find_from(&board, CellPos::new(0, 0)).is_empty());
    }

    #[test]
    fn test_paths_spell_their_words() {
        let (good, banned) = dicts(&["TEA", "TEN", "TENT"], &[]);
        let board = Board::from_rows(&["TEA", "NTX"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        for found in finder.find_paths_from(&board, CellPos::new(0, 0)) {
            assert_eq!(found.path[0], CellPos::new(0, 0));
            let spelled: String = found
                .path
                .iter()
                .map(|&p| board.cell(p).unwrap().letters.to_ascii_uppercase())
                .collect();
            assert_eq!(spelled, found.word);
            for pair in found.path.windows(2) {
                assert!(pair[0].touches(pair[1]));
            }
        }
    }

    #[test]
    fn test_find_all() {
        let (good, banned) = dicts(&["CAT", "ACT", "TAX"], &[]);
        let board = Board::from_rows(&["CAT", "XCX"]).unwrap();
        let finder = WordFinder::new(&good, &banned);

        assert_eq!(finder.find_all(&board), vec!["ACT", "CAT", "TAX"]);
    }

    #[test]
    fn test_with_config() {
        let (good, banned) = dicts(&["ATE"], &[]);
        let config = EngineConfig::default().with_min_word_length(4);
        let finder = WordFinder::with_config(&good, &banned, &config);
        assert_eq!(finder.min_length(), 4);

        let board = Board::from_rows(&["ATE"]).unwrap();
        assert!(finder.find_from(&board, CellPos::new(0, 0)).is_empty());
    }
}
