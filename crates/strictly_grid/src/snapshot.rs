//! Read-only render state handed to presentation layers.

use super::{Board, GameStatus, Player, Position, check_winner, winning_line};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An immutable copy of the game at one point in time.
///
/// Snapshots own their board, so later moves never change one that has
/// already been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Player whose turn it is. Left on the last mover once terminal.
    next_player: Player,
    /// Status derived from the board.
    status: GameStatus,
}

impl Snapshot {
    pub(crate) fn new(board: Board, next_player: Player, status: GameStatus) -> Self {
        debug_assert_eq!(check_winner(&board), status.winner());
        Self {
            board,
            next_player,
            status,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Positions of the completed line, if the game was won.
    pub fn winning_positions(&self) -> Option<[Position; 3]> {
        let (_, line) = winning_line(&self.board)?;
        let [a, b, c] = line.map(Position::from_index);
        Some([a?, b?, c?])
    }
}
