//! Tests for board state and win detection.

use parlor_tictactoe::{Board, MoveError, Player, Position, Square};
use strum::IntoEnumIterator;

#[test]
fn test_empty_board_has_nine_open_squares() {
    let board = Board::new();
    let empty = board.empty_positions();
    assert_eq!(empty, Position::ALL.to_vec());
}

#[test]
fn test_empty_positions_ascending_after_center_move() {
    let mut board = Board::new();
    board.place(Position::Center, Player::X).unwrap();

    let empty = board.empty_positions();
    assert_eq!(empty.len(), 8);
    assert!(!empty.contains(&Position::Center));

    // Ascending square order is preserved.
    let numbers: Vec<u8> = empty.iter().map(|p| p.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 6, 7, 8, 9]);
}

#[test]
fn test_place_rejects_occupied_square() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Player::X).unwrap();

    let err = board.place(Position::TopLeft, Player::O).unwrap_err();
    assert_eq!(err, MoveError::Occupied(Position::TopLeft));

    // First mark survives.
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
}

#[test]
fn test_top_row_wins() {
    let mut board = Board::new();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        board.place(pos, Player::X).unwrap();
    }
    assert_eq!(board.winning_mark(), Some(Player::X));
    assert!(board.someone_won());
}

#[test]
fn test_column_and_diagonal_wins() {
    let mut column = Board::new();
    for pos in [Position::TopCenter, Position::Center, Position::BottomCenter] {
        column.place(pos, Player::O).unwrap();
    }
    assert_eq!(column.winning_mark(), Some(Player::O));

    let mut diagonal = Board::new();
    for pos in [Position::TopRight, Position::Center, Position::BottomLeft] {
        diagonal.place(pos, Player::X).unwrap();
    }
    assert_eq!(diagonal.winning_mark(), Some(Player::X));
}

#[test]
fn test_mixed_line_is_not_a_win() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Player::X).unwrap();
    board.place(Position::TopCenter, Player::O).unwrap();
    board.place(Position::TopRight, Player::X).unwrap();

    assert_eq!(board.winning_mark(), None);
    assert!(!board.someone_won());
}

#[test]
fn test_partial_line_is_not_a_win() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Player::X).unwrap();
    board.place(Position::TopCenter, Player::X).unwrap();

    assert_eq!(board.winning_mark(), None);
}

#[test]
fn test_full_board_without_winner() {
    // X O X / X O O / O X X has no complete line.
    let mut board = Board::new();
    let marks = [
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::O),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::X),
        (Position::Center, Player::O),
        (Position::MiddleRight, Player::O),
        (Position::BottomLeft, Player::O),
        (Position::BottomCenter, Player::X),
        (Position::BottomRight, Player::X),
    ];
    for (pos, mark) in marks {
        board.place(pos, mark).unwrap();
    }

    assert!(board.is_full());
    assert!(board.empty_positions().is_empty());
    assert_eq!(board.winning_mark(), None);
}

#[test]
fn test_reset_clears_every_square() {
    let mut board = Board::new();
    board.place(Position::Center, Player::X).unwrap();
    board.place(Position::TopLeft, Player::O).unwrap();

    board.reset();
    assert_eq!(board, Board::new());
    assert_eq!(board.empty_positions().len(), 9);
}

#[test]
fn test_board_serializes_mid_round() {
    let mut board = Board::new();
    board.place(Position::Center, Player::X).unwrap();
    board.place(Position::TopLeft, Player::O).unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.winning_mark(), None);
}

#[test]
fn test_position_number_round_trip() {
    for pos in Position::ALL {
        assert_eq!(Position::from_number(pos.number()), Some(pos));
        assert_eq!(Position::from_index(pos.index()), Some(pos));
    }
    assert_eq!(Position::from_number(0), None);
    assert_eq!(Position::from_number(10), None);
    assert_eq!(Position::from_index(9), None);

    // Variant iteration agrees with the ascending ALL order.
    let iterated: Vec<Position> = Position::iter().collect();
    assert_eq!(iterated, Position::ALL.to_vec());
}
