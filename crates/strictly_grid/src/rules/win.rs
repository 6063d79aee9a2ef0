//! Win detection logic.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// Three cell indices that win when uniformly marked.
pub type Line = [usize; 3];

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line and the player who holds it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    let cells = board.cells();
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match cells[a] {
            Cell::Marked(player) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(index, player) in marks {
            board.set(index, Cell::Marked(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(&line.map(|i| (i, Player::O)));
            assert_eq!(winning_line(&board), Some((Player::O, line)));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(2, Player::X), (4, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }
}
