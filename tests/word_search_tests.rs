//! Word search integration tests on a full board, plus selection validation
//! feeding into a capture.

use word_bridge::{best_path, Board, CellPos, Dictionary, Error, PathCost, RoundOutcome, Team, WordFinder};

// S  T  A  R
// E  A  T  S
// N  O  T  E
// D  Qu I  T
fn board() -> Board {
    Board::from_rows(&["STAR", "EATS", "NOTE", "DQuIT"]).unwrap()
}

fn good() -> Dictionary {
    Dictionary::from_words([
        "sea", "seat", "set", "star", "stars", "tea", "note", "quit", "quite", "quote", "zebra",
    ])
}

fn path(cells: &[(i32, i32)]) -> Vec<CellPos> {
    cells.iter().map(|&(x, y)| CellPos::new(x, y)).collect()
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_find_from_corner() {
    let good = good();
    let banned = Dictionary::new();
    let finder = WordFinder::new(&good, &banned);

    assert_eq!(
        finder.find_from(&board(), CellPos::new(0, 0)),
        vec!["STARS", "SEAT", "STAR", "SEA", "SET"]
    );
}

#[test]
fn test_banned_list_filters_results() {
    let good = good();
    let banned = Dictionary::from_words(["stars", "sea"]);
    let finder = WordFinder::new(&good, &banned);

    assert_eq!(
        finder.find_from(&board(), CellPos::new(0, 0)),
        vec!["SEAT", "STAR", "SET"]
    );
}

#[test]
fn test_qu_tile_start() {
    let good = good();
    let banned = Dictionary::new();
    let finder = WordFinder::new(&good, &banned);

    assert_eq!(
        finder.find_from(&board(), CellPos::new(1, 3)),
        vec!["QUITE", "QUOTE", "QUIT"]
    );
}

#[test]
fn test_find_all() {
    let good = good();
    let banned = Dictionary::new();
    let finder = WordFinder::new(&good, &banned);

    assert_eq!(
        finder.find_all(&board()),
        vec!["QUITE", "QUOTE", "STARS", "NOTE", "QUIT", "SEAT", "STAR", "SEA", "SET", "TEA"]
    );
}

#[test]
fn test_search_is_deterministic() {
    let good = good();
    let banned = Dictionary::new();
    let finder = WordFinder::new(&good, &banned);
    let board = board();

    let first = finder.find_paths_from(&board, CellPos::new(0, 0));
    let second = finder.find_paths_from(&board, CellPos::new(0, 0));
    assert_eq!(first, second);
}

#[test]
fn test_search_reads_snapshot() {
    let good = good();
    let banned = Dictionary::new();
    let finder = WordFinder::new(&good, &banned);

    let mut live = board();
    let snapshot = live.clone();
    live.capture(&path(&[(0, 0), (0, 1)]), Team::A).unwrap();

    // Ownership never affects spelling
    assert_eq!(
        finder.find_from(&live, CellPos::new(0, 0)),
        finder.find_from(&snapshot, CellPos::new(0, 0))
    );
    assert_eq!(snapshot.owned_by(Team::A), 0);
    assert_eq!(live.owned_by(Team::A), 2);
}

// =============================================================================
// Selection Tests
// =============================================================================

#[test]
fn test_selection_accepts_word() {
    let good = good();
    let banned = Dictionary::new();
    let finder = WordFinder::new(&good, &banned);

    let word = finder
        .validate_selection(&board(), &path(&[(0, 0), (0, 1), (1, 1), (2, 1)]))
        .unwrap();
    assert_eq!(word, "SEAT");

    let quit = finder
        .validate_selection(&board(), &path(&[(1, 3), (2, 3), (3, 3)]))
        .unwrap();
    assert_eq!(quit, "QUIT");
}

#[test]
fn test_selection_rejections() {
    let good = good();
    let banned = Dictionary::from_words(["stars"]);
    let finder = WordFinder::new(&good, &banned);
    let board = board();

    let gap = finder.validate_selection(&board, &path(&[(0, 0), (0, 1), (1, 1), (3, 3)]));
    assert!(matches!(gap, Err(Error::InvalidSelection(_))));

    let reuse = finder.validate_selection(&board, &path(&[(0, 0), (0, 1), (0, 0)]));
    assert!(matches!(reuse, Err(Error::InvalidSelection(_))));

    let outside = finder.validate_selection(&board, &path(&[(3, 0), (4, 0), (4, 1)]));
    assert!(matches!(outside, Err(Error::OutOfBounds(p)) if p == CellPos::new(4, 0)));

    let short = finder.validate_selection(&board, &path(&[(0, 0), (0, 1)]));
    assert!(matches!(short, Err(Error::TooShort { min: 3, .. })));

    let unknown = finder.validate_selection(&board, &path(&[(0, 0), (1, 0), (2, 0)]));
    assert!(matches!(unknown, Err(Error::UnknownWord(w)) if w == "STA"));

    let stars = path(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]);
    assert!(matches!(finder.validate_selection(&board, &stars), Err(Error::BannedWord(_))));
}

// =============================================================================
// Round Flow
// =============================================================================

#[test]
fn test_captures_build_a_bridge() {
    let good = good();
    let banned = Dictionary::new();
    let finder = WordFinder::new(&good, &banned);
    let mut board = board();

    let seat = path(&[(0, 0), (0, 1), (1, 1), (2, 1)]);
    finder.validate_selection(&board, &seat).unwrap();
    board.capture(&seat, Team::A).unwrap();

    let result = best_path(&board, Team::A);
    assert_eq!(result.cost, PathCost::new(0, 1, 3));
    assert_eq!(result.path, path(&[(0, 1), (1, 1), (2, 1), (3, 1)]));
    assert_eq!(RoundOutcome::evaluate(&board), RoundOutcome::InProgress);

    // Claiming the last gap completes the bridge
    board.capture(&[CellPos::new(3, 1)], Team::A).unwrap();
    assert_eq!(RoundOutcome::evaluate(&board), RoundOutcome::Won(Team::A));
}
