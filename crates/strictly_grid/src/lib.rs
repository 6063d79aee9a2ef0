//! Strictly Grid - a checked state machine for 3x3 grid games
//!
//! The core owns a tic-tac-toe board, decides whose turn it is, and derives
//! the game status from the board on every read. Callers feed it cell
//! indices and render the [`Snapshot`] it hands back.
//!
//! # Architecture
//!
//! - **Types**: board, cells, players and status
//! - **Rules**: pure win and draw detection over the 8 lines
//! - **Contracts**: preconditions and postconditions around every move
//! - **Invariants**: properties every reachable state satisfies
//! - **Observer**: optional push notification after each accepted move
//!
//! # Example
//!
//! ```
//! use strictly_grid::{GameState, GameStatus, MoveError, Player};
//!
//! let mut game = GameState::new();
//! let snapshot = game.apply_move(4)?;
//! assert_eq!(*snapshot.next_player(), Player::O);
//! assert_eq!(*snapshot.status(), GameStatus::InProgress);
//!
//! assert!(matches!(game.apply_move(4), Err(MoveError::CellOccupied(_))));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod observer;
mod position;
mod rules;
mod snapshot;
mod types;

// Crate-level exports - Core types
pub use types::{Board, Cell, GameStatus, Player};

// Crate-level exports - Positions and moves
pub use action::Move;
pub use position::Position;

// Crate-level exports - State machine
pub use error::MoveError;
pub use game::GameState;
pub use observer::SnapshotObserver;
pub use snapshot::Snapshot;

// Crate-level exports - Rules
pub use rules::{LINES, Line, check_winner, evaluate, is_draw, is_full, winning_line};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, GridInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant,
};
