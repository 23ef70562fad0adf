//! Property-based tests for the board.
//!
//! These tests use proptest to check that the neighborhood and the
//! generation rule behave the same on boards of any size and with any seed.

use lifegrid_lib::{Board, LifeState, Position};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_board(max: i32)(columns in 2..=max, rows in 2..=max) -> (i32, i32) {
        (columns, rows)
    }
}

fn seeded_board(max: i32) -> impl Strategy<Value = Board> {
    (2..=max, 2..=max).prop_flat_map(|(columns, rows)| {
        proptest::collection::vec(any::<bool>(), (columns * rows) as usize).prop_map(
            move |cells| {
                let mut board = Board::new(columns, rows).unwrap();
                let alive = cells
                    .iter()
                    .enumerate()
                    .filter(|(_, &alive)| alive)
                    .map(|(i, _)| Position::new(i as i32 % columns, i as i32 / columns));
                board.seed_life(alive).unwrap();
                board
            },
        )
    })
}

/// The next state of a cell, computed directly from the coordinates
/// of its neighbors instead of the links.
fn expected_state(
    states: &[LifeState],
    columns: i32,
    rows: i32,
    position: Position,
) -> LifeState {
    let mut alive = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if (dc, dr) == (0, 0) {
                continue;
            }
            let Position { column, row } = position.offset(dc, dr).unwrap();
            let inside = 0 <= column && column < columns && 0 <= row && row < rows;
            if inside && states[(row * columns + column) as usize].is_alive() {
                alive += 1;
            }
        }
    }
    states[(position.row * columns + position.column) as usize].successor(alive)
}

proptest! {
    #[test]
    fn neighbor_counts((columns, rows) in arbitrary_board(20)) {
        let board = Board::new(columns, rows).unwrap();
        for cell in board.cells() {
            let Position { column, row } = cell.position();
            let on_column_edge = column == 0 || column == columns - 1;
            let on_row_edge = row == 0 || row == rows - 1;
            let expected = match (on_column_edge, on_row_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            prop_assert_eq!(cell.neighbors().len(), expected, "cell at {}", cell.position());
        }
    }

    #[test]
    fn neighbors_are_symmetric((columns, rows) in arbitrary_board(12)) {
        let board = Board::new(columns, rows).unwrap();
        for cell in board.cells() {
            let this = board.find_cell(cell.position()).unwrap();
            for &n in cell.neighbors() {
                prop_assert!(board[n].neighbors().contains(&this));
                prop_assert_ne!(n, this);
            }
        }
    }

    #[test]
    fn neighbors_are_adjacent((columns, rows) in arbitrary_board(12)) {
        let board = Board::new(columns, rows).unwrap();
        for cell in board.cells() {
            let p = cell.position();
            for &n in cell.neighbors() {
                let q = board[n].position();
                prop_assert!((p.column - q.column).abs() <= 1 && (p.row - q.row).abs() <= 1);
            }
        }
    }

    #[test]
    fn render_is_idempotent(board in seeded_board(12)) {
        prop_assert_eq!(board.to_string(), board.to_string());
        prop_assert_eq!(board.plaintext(), board.plaintext());
        prop_assert_eq!(board.to_string().lines().count(), board.rows() as usize);
    }

    #[test]
    fn generation_is_simultaneous(mut board in seeded_board(12)) {
        let (columns, rows) = (board.columns(), board.rows());
        let before = board.states();
        let expected: Vec<LifeState> = board
            .cells()
            .map(|c| expected_state(&before, columns, rows, c.position()))
            .collect();
        let report = board.generate();
        prop_assert_eq!(board.states(), expected);

        let after = board.states();
        let changed = |from: LifeState| {
            before
                .iter()
                .zip(&after)
                .filter(|&(&b, &a)| b == from && a == !from)
                .count()
        };
        prop_assert_eq!(report.births, changed(LifeState::Dead));
        prop_assert_eq!(report.deaths, changed(LifeState::Alive));
    }

    #[test]
    fn out_of_range_is_rejected(
        (columns, rows) in arbitrary_board(10),
        column in -3..13i32,
        row in -3..13i32,
    ) {
        let mut board = Board::new(columns, rows).unwrap();
        let inside = 0 <= column && column < columns && 0 <= row && row < rows;
        prop_assert_eq!(board.seed_life([(column, row)]).is_ok(), inside);
        prop_assert_eq!(board.alive_count(), inside as usize);
    }
}
