//! Tests for tic-tac-toe positions and the board.

use timed_tictactoe::{Board, Player, Position, Square, rules};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_round_trips_row_major() {
    for (index, pos) in Position::ALL.into_iter().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(pos.row() * 3 + pos.col(), index);
    }
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);

    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_win_lines_cover_rows_columns_diagonals() {
    assert_eq!(rules::WIN_LINES.len(), 8);
    for line in rules::WIN_LINES {
        let rows: Vec<_> = line.iter().map(|p| p.row()).collect();
        let cols: Vec<_> = line.iter().map(|p| p.col()).collect();
        let same_row = rows.iter().all(|r| *r == rows[0]);
        let same_col = cols.iter().all(|c| *c == cols[0]);
        let diagonal = line.contains(&Position::Center) && !same_row && !same_col;
        assert!(same_row || same_col || diagonal, "{line:?}");
    }
}
