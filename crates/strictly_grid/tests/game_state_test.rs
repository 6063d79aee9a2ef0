//! Tests for the grid game state machine.

use strictly_grid::{Cell, GameState, GameStatus, MoveError, Player, Position};

fn play(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        game.apply_move(index).expect("Valid move");
    }
    game
}

#[test]
fn test_turns_alternate_starting_with_x() {
    let mut game = GameState::new();
    let mut expected = Player::X;

    for index in [4, 0, 8, 2, 1, 7, 6, 3] {
        assert_eq!(game.next_player(), expected);
        let snapshot = game.apply_move(index).expect("Valid move");
        assert_eq!(*snapshot.status(), GameStatus::InProgress);
        expected = expected.opponent();
        assert_eq!(*snapshot.next_player(), expected);
    }
}

#[test]
fn test_column_win_scenario() {
    let game = play(&[0, 1, 3, 4, 6]);

    let snapshot = game.snapshot();
    assert_eq!(*snapshot.status(), GameStatus::Won(Player::X));
    assert_eq!(
        snapshot.winning_positions(),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
}

#[test]
fn test_full_board_draw_scenario() {
    let game = play(&[0, 4, 8, 1, 7, 6, 2, 5, 3]);

    let snapshot = game.snapshot();
    assert_eq!(*snapshot.status(), GameStatus::Draw);
    assert!(snapshot.board().cells().iter().all(|cell| !cell.is_empty()));
    assert_eq!(snapshot.winning_positions(), None);
    // Terminal move does not pass the turn.
    assert_eq!(*snapshot.next_player(), Player::X);
}

#[test]
fn test_right_column_completes_before_board_fills() {
    // X: 0, 8, 2, 5 completes the right column on the seventh move.
    let mut game = play(&[0, 4, 8, 1, 2, 6, 5]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(
        game.snapshot().winning_positions(),
        Some([Position::TopRight, Position::MiddleRight, Position::BottomRight])
    );

    // The remaining moves of that sequence are all refused.
    for index in [3, 7] {
        assert_eq!(
            game.apply_move(index),
            Err(MoveError::GameOver(GameStatus::Won(Player::X)))
        );
    }
    assert_eq!(game.history().len(), 7);
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut game = play(&[0]);
    let before = game.snapshot();

    let result = game.apply_move(0);
    assert_eq!(result, Err(MoveError::CellOccupied(Position::TopLeft)));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.next_player(), Player::O);
    assert_eq!(game.board().get(0), Some(Cell::Marked(Player::X)));
}

#[test]
fn test_every_move_after_win_is_game_over() {
    let mut game = play(&[0, 1, 3, 4, 6]);
    let before = game.snapshot();

    for index in 0..12 {
        assert_eq!(
            game.apply_move(index),
            Err(MoveError::GameOver(GameStatus::Won(Player::X)))
        );
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_move_after_draw_is_game_over() {
    let mut game = play(&[0, 4, 8, 1, 7, 6, 2, 5, 3]);
    assert_eq!(
        game.apply_move(4),
        Err(MoveError::GameOver(GameStatus::Draw))
    );
}

#[test]
fn test_snapshot_is_idempotent() {
    let game = play(&[4, 0, 8]);
    assert_eq!(game.snapshot(), game.snapshot());

    let finished = play(&[0, 1, 3, 4, 6]);
    assert_eq!(finished.snapshot(), finished.snapshot());
}

#[test]
fn test_snapshot_is_detached_from_later_moves() {
    let mut game = GameState::new();
    let first = game.apply_move(4).expect("Valid move");
    game.apply_move(0).expect("Valid move");

    assert!(first.board().is_empty(0));
    assert_eq!(*first.next_player(), Player::O);
}

#[test]
fn test_replay_matches_incremental_play() {
    let moves = [4, 0, 8, 2, 1];
    let replayed = GameState::replay(&moves).expect("Valid replay");
    assert_eq!(replayed.snapshot(), play(&moves).snapshot());
    assert_eq!(replayed.history().len(), moves.len());
}

#[test]
fn test_replay_stops_at_first_rejected_move() {
    assert_eq!(
        GameState::replay(&[4, 4]).unwrap_err(),
        MoveError::CellOccupied(Position::Center)
    );
}

#[test]
fn test_apply_position() {
    let mut game = GameState::new();
    let snapshot = game.apply_position(Position::BottomRight).expect("Valid move");
    assert_eq!(snapshot.board().get(8), Some(Cell::Marked(Player::X)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::CellOccupied(Position::Center).to_string(),
        "Cell Center is already occupied"
    );
    assert_eq!(
        MoveError::GameOver(GameStatus::Draw).to_string(),
        "Game is already over (Draw)"
    );
    assert!(MoveError::OutOfRange(12).to_string().contains("12"));
}

#[test]
fn test_snapshot_serializes() {
    let game = play(&[4]);
    let json = serde_json::to_value(game.snapshot()).expect("Serializable");
    assert_eq!(json["next_player"], "O");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["board"]["cells"][4]["Marked"], "X");
}
