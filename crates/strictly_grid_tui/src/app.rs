//! Application state and logic.

use crate::input::{Action, move_cursor};
use strictly_grid::{GameState, GameStatus, MoveError, Position, Snapshot};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the live game plus the last snapshot it produced; rendering only
/// ever reads the snapshot.
pub struct App {
    game: GameState,
    snapshot: Snapshot,
    cursor: Position,
    status_message: String,
    games_played: u32,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let game = new_game();
        let snapshot = game.snapshot();
        Self {
            status_message: describe(&snapshot),
            game,
            snapshot,
            cursor: Position::Center,
            games_played: 0,
        }
    }

    /// Snapshot to render.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Number of games started after the first.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Applies an action. Returns false when the app should exit.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::Play(position) => {
                self.cursor = position;
                self.make_move(position);
            }
            Action::PlayCursor => self.make_move(self.cursor),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Restart => self.restart(),
            Action::Quit => return false,
        }
        true
    }

    /// Makes a move at the given position.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, position: Position) {
        match self.game.apply_position(position) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.status_message = describe(&snapshot);
            }
            Err(MoveError::GameOver(_)) => {
                self.status_message =
                    "Game over. Press 'r' to restart or 'q' to quit.".to_string();
            }
            Err(e) => {
                debug!(error = %e, "Move rejected, board unchanged");
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    /// Discards the current game and starts a new one.
    pub fn restart(&mut self) {
        self.games_played += 1;
        info!(games_played = self.games_played, "Restarting game");
        self.game = new_game();
        self.snapshot = self.game.snapshot();
        self.status_message = describe(&self.snapshot);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn new_game() -> GameState {
    let mut game = GameState::new();
    game.subscribe(|snapshot: &Snapshot| {
        debug!(
            next_player = %snapshot.next_player(),
            status = %snapshot.status(),
            "Board updated"
        );
    });
    game
}

/// Status line for a snapshot.
fn describe(snapshot: &Snapshot) -> String {
    match snapshot.status() {
        GameStatus::InProgress => format!(
            "Player {}'s turn. Press 1-9, or arrows and Enter.",
            snapshot.next_player()
        ),
        GameStatus::Won(player) => {
            format!("Player {} wins! Press 'r' to restart or 'q' to quit.", player)
        }
        GameStatus::Draw => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
    }
}
