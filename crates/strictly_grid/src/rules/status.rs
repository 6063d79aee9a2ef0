//! Status evaluation: the board is the only input.

use super::super::{Board, GameStatus};
use super::draw::is_full;
use super::win::check_winner;
use tracing::instrument;

/// Derives the game status from the board.
///
/// A completed line wins; otherwise a full board is a draw; otherwise the
/// game is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
