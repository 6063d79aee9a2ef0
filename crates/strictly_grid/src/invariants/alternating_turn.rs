//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// History must show X, O, X, O, ... and `next_player` must follow it.
/// Once the game is over the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        let expected_next = match history.last() {
            Some(last) if game.status().is_terminal() => last.player,
            Some(last) => last.player.opponent(),
            None => Player::X,
        };

        game.next_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::new();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay(&[0, 4, 2, 6, 8]).expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_terminal_game_keeps_last_mover() {
        let game = GameState::replay(&[0, 1, 3, 4, 6]).expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut game = GameState::replay(&[4]).expect("legal move");
        game.next_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
