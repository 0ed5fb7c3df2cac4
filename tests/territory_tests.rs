//! Territory path finder integration tests.

use word_bridge::{best_path, has_bridge, Board, Cell, CellPos, GameRng, Grid, PathCost, RoundOutcome, Team, TerritoryPath};

fn board(owners: &[&str]) -> Board {
    let width = owners[0].len();
    Board::from_letters(width, owners.len(), vec!["E"; width * owners.len()])
        .unwrap()
        .with_owners(owners)
        .unwrap()
}

/// Path and cost agree with each other and with the grid.
fn check(grid: &impl Grid, team: Team, result: &TerritoryPath) {
    assert_eq!(result.cost.cells(), Some(result.path.len()));
    assert_eq!(result.path[0].x, team.start_column(grid.width()));
    assert_eq!(result.path.last().unwrap().x, team.goal_column(grid.width()));

    let mut tally = PathCost::ZERO;
    for (i, &pos) in result.path.iter().enumerate() {
        assert!(!result.path[..i].contains(&pos), "cell {} repeated", pos);
        tally = tally.step(grid.cell(pos).unwrap().relation(team));
    }
    assert_eq!(tally, result.cost);
}

// =============================================================================
// Cost Tests
// =============================================================================

#[test]
fn test_all_ally_costs_width() {
    for width in 1..6 {
        let row = "A".repeat(width);
        let grid = board(&[&row, &row, &row]);
        let result = best_path(&grid, Team::A);

        assert_eq!(result.cost, PathCost::new(0, 0, width as u32));
        check(&grid, Team::A, &result);
    }
}

#[test]
fn test_all_enemy_costs_width() {
    let grid = board(&["BBBB", "BBBB"]);
    let result = best_path(&grid, Team::A);

    assert_eq!(result.cost, PathCost::new(4, 0, 0));
    assert!(result.is_reachable());
    assert!(!result.is_bridge());
}

#[test]
fn test_three_neutrals_beat_one_enemy() {
    let grid = board(&["ABA", "..."]);
    let result = best_path(&grid, Team::A);

    assert_eq!(result.cost, PathCost::new(0, 3, 0));
    assert_eq!(
        result.path,
        vec![CellPos::new(0, 1), CellPos::new(1, 1), CellPos::new(2, 1)]
    );
}

#[test]
fn test_repeatable() {
    let grid = Board::random_territory(9, 7, &mut GameRng::new(5)).unwrap();
    for team in Team::ALL {
        assert_eq!(best_path(&grid, team), best_path(&grid, team));
    }
}

#[test]
fn test_mirrored_board_swaps_teams() {
    let mut rng = GameRng::new(2024);
    for _ in 0..20 {
        let grid = Board::random_territory(6, 5, &mut rng).unwrap();
        let mirror = grid.mirrored();

        for team in Team::ALL {
            let here = best_path(&grid, team);
            let there = best_path(&mirror, team.opponent());
            assert_eq!(here.cost, there.cost);
            assert_eq!(here.len(), there.len());
            check(&grid, team, &here);
            check(&mirror, team.opponent(), &there);
        }
    }
}

// =============================================================================
// Win Detection Tests
// =============================================================================

#[test]
fn test_full_row_is_a_bridge() {
    let grid = board(&["B...", "AAAA", "..B."]);
    assert!(has_bridge(&grid, Team::A));
    assert!(!has_bridge(&grid, Team::B));
    assert_eq!(RoundOutcome::evaluate(&grid), RoundOutcome::Won(Team::A));
}

#[test]
fn test_partial_row_is_not_a_bridge() {
    let grid = board(&["AAA.", "....", "...."]);
    let result = best_path(&grid, Team::A);

    assert_eq!(result.cost, PathCost::new(0, 1, 3));
    assert!(!result.is_bridge());
    assert_eq!(RoundOutcome::evaluate(&grid), RoundOutcome::InProgress);
}

#[test]
fn test_winding_bridge_counts() {
    // A . A A
    // A A A .   <- no straight row, but a bent 4-connected chain
    // . . A A
    let grid = board(&["A.AA", "AAA.", "..AA"]);
    let result = best_path(&grid, Team::A);

    assert!(result.is_bridge());
    check(&grid, Team::A, &result);
}

#[test]
fn test_diagonal_touch_is_not_a_bridge() {
    // Territory is 4-connected: corners do not join
    let grid = board(&["A.", ".A"]);
    assert!(!has_bridge(&grid, Team::A));
    assert_eq!(best_path(&grid, Team::A).cost, PathCost::new(0, 1, 1));
}

// =============================================================================
// Custom Grid Tests
// =============================================================================

/// A board with one column of missing cells.
struct Holed {
    board: Board,
    hole: i32,
}

impl Grid for Holed {
    fn width(&self) -> usize {
        self.board.width()
    }

    fn height(&self) -> usize {
        self.board.height()
    }

    fn cell(&self, pos: CellPos) -> Option<&Cell> {
        if pos.x == self.hole {
            None
        } else {
            self.board.cell(pos)
        }
    }
}

#[test]
fn test_missing_column_is_unreachable() {
    let grid = Holed {
        board: board(&["AAA", "AAA"]),
        hole: 1,
    };
    let result = best_path(&grid, Team::A);

    assert_eq!(result, TerritoryPath::unreachable());
    assert!(result.cost.is_infinite());
    assert_eq!(RoundOutcome::evaluate(&grid), RoundOutcome::InProgress);
}

#[test]
fn test_missing_start_column() {
    let grid = Holed {
        board: board(&["AAA", "AAA"]),
        hole: 0,
    };
    assert!(!best_path(&grid, Team::A).is_reachable());
    assert!(!best_path(&grid, Team::B).is_reachable());

    let open = Holed {
        board: board(&["AAA", "AAA"]),
        hole: 9,
    };
    assert_eq!(best_path(&open, Team::A).cost, PathCost::new(0, 0, 3));
}
