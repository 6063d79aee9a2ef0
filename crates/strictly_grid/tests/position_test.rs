//! Tests for board positions.

use strictly_grid::{Board, Cell, GameState, Player, Position};

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
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut cells = [Cell::Empty; 9];
    cells[0] = Cell::Marked(Player::X);
    cells[4] = Cell::Marked(Player::O);
    let board = Board::from_cells(cells);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_game_valid_moves_track_play() {
    let game = GameState::replay(&[0, 4]).expect("Valid replay");
    let valid = game.valid_moves();
    assert_eq!(valid.len(), 7);
    assert_eq!(valid[0], Position::TopCenter);
}
