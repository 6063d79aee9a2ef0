//! Errors returned when a move is rejected.

use super::{GameStatus, Position};

/// Error that can occur when validating or applying a move.
///
/// Every variant except `InvariantViolation` is an expected, recoverable
/// condition: the game state is untouched and the caller may pick another
/// cell or start a new game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game already reached a terminal status.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// The index does not name a cell (must be 0-8).
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
