//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P(state, action)} action {Q(state, action)}.

use super::error::MoveError;
use super::invariants::{GridInvariants, InvariantSet};
use super::{Cell, GameState, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions on the state the action produced.
    fn post(state: &S, action: &A) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game has not reached a terminal status.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` once the game is won or drawn.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        let status = game.status();
        if status.is_terminal() {
            Err(MoveError::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The index names a cell.
pub struct IndexInRange;

impl IndexInRange {
    /// Converts the index, failing with `OutOfRange` past 8.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::try_from(index)
    }
}

/// Precondition: The target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` if the cell holds a mark.
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(position.to_index()) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition: the game is live, the index is on the board and
/// the cell is free. Checked in that order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target position.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<Position, MoveError> {
        GameNotOver::check(game)?;
        let position = IndexInRange::check(index)?;
        CellIsEmpty::check(position, game)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions, keyed by cell index.
///
/// Preconditions:
/// - Game is not over
/// - Index is in range
/// - Cell is empty
///
/// Postconditions:
/// - The last recorded move targets the index and its mark is on the board
/// - Every invariant in [`GridInvariants`] holds
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(game: &GameState, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, game).map(|_| ())
    }

    fn post(game: &GameState, index: &usize) -> Result<(), MoveError> {
        let recorded = game.history().last().is_some_and(|mov| {
            mov.position.to_index() == *index
                && game.board().get(*index) == Some(Cell::Marked(mov.player))
        });
        if !recorded {
            warn!(index, "Move not reflected in history and board");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: cell {} does not hold the last recorded move",
                index
            )));
        }

        GridInvariants::check_all(game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
