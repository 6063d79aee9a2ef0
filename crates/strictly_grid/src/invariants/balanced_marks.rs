//! Balanced marks invariant: X leads O by at most one mark.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::debug;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            debug!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by at most one mark"
    }
}
