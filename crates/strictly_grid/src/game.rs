//! The grid game state machine.

use super::contracts::{Contract, LegalMove, MoveContract};
use super::error::MoveError;
use super::observer::SnapshotObserver;
use super::rules::evaluate;
use super::{Board, Cell, GameStatus, Move, Player, Position, Snapshot};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// One game of tic-tac-toe.
///
/// The board is the single source of truth: [`status`](Self::status) is
/// evaluated from it on every call and never stored. The only mutation is
/// [`apply_move`](Self::apply_move), which either applies a legal move in
/// full or leaves the game untouched.
///
/// `GameState` does no internal locking. Callers sharing one across
/// threads wrap it in a mutex.
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) next_player: Player,
    pub(crate) history: Vec<Move>,
    observers: Vec<Box<dyn SnapshotObserver>>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Player::X,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Builds a game by applying cell indices in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected move.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index)?;
        }
        Ok(game)
    }

    /// Places the next player's mark at `index` (0-8, row-major).
    ///
    /// On success the turn passes to the opponent unless the move ended
    /// the game, observers are notified, and the post-move snapshot is
    /// returned.
    ///
    /// # Errors
    ///
    /// Nothing is mutated on error.
    ///
    /// - `MoveError::GameOver` if the game is already won or drawn
    /// - `MoveError::OutOfRange` if `index` is greater than 8
    /// - `MoveError::CellOccupied` if the cell already holds a mark
    #[instrument(skip(self), fields(player = %self.next_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<Snapshot, MoveError> {
        let position = LegalMove::check(index, self).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected");
        })?;

        let player = self.next_player;
        self.board.set(index, Cell::Marked(player));
        self.history.push(Move::new(player, position));

        let status = self.status();
        if !status.is_terminal() {
            self.next_player = player.opponent();
        }

        if cfg!(debug_assertions) {
            MoveContract::post(self, &index)?;
        }

        info!(%position, %status, moves = self.history.len(), "Move applied");
        debug!(board = %self.board, "Board after move");

        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_move(&snapshot);
        }
        Ok(snapshot)
    }

    /// Typed variant of [`apply_move`](Self::apply_move).
    pub fn apply_position(&mut self, position: Position) -> Result<Snapshot, MoveError> {
        self.apply_move(position.to_index())
    }

    /// Returns an immutable copy of board, next player and status.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board, self.next_player, self.status())
    }

    /// Evaluates the status from the current board.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Positions still open for play. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Registers an observer called after every accepted move.
    #[instrument(skip_all, fields(observers = self.observers.len() + 1))]
    pub fn subscribe(&mut self, observer: impl SnapshotObserver + 'static) {
        self.observers.push(Box::new(observer));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("next_player", &self.next_player)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}
