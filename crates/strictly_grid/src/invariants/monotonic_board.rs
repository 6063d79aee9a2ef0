//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, Cell, GameState};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replays the move history onto an empty board; every move must land on
/// an empty cell and the result must equal the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            let index = mov.position.to_index();
            if !reconstructed.is_empty(index) {
                return false;
            }
            reconstructed.set(index, Cell::Marked(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::replay(&[0, 4, 2, 6]).expect("legal moves");
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameState::replay(&[4]).expect("legal move");
        game.board.set(4, Cell::Marked(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = GameState::replay(&[4]).expect("legal move");
        game.history.push(Move::new(Player::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
