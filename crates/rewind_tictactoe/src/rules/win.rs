//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in detection order.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
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

/// A won board: who won and along which line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// The player holding the line.
    pub winner: Player,
    /// Indices of the three squares forming the line.
    pub line: [usize; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`WINNING_LINES`] order that holds three
/// equal marks, or `None`.
#[instrument(skip(board))]
pub fn detect(board: &Board) -> Option<Outcome> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Some(Square::Occupied(winner))
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(Outcome { winner, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        marks.iter().fold(Board::new(), |board, &(pos, player)| {
            board.with_mark(pos, player).unwrap()
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(
            detect(&board),
            Some(Outcome {
                winner: Player::X,
                line: [0, 1, 2]
            })
        );
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[(1, Player::O), (4, Player::O), (7, Player::O)]);
        assert_eq!(
            detect(&board),
            Some(Outcome {
                winner: Player::O,
                line: [1, 4, 7]
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        assert_eq!(detect(&board).map(|o| o.line), Some([2, 4, 6]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert_eq!(detect(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in WINNING_LINES {
            let board = board_with(&line.map(|pos| (pos, Player::X)));
            assert_eq!(detect(&board).map(|o| o.line), Some(line));
        }
    }

    #[test]
    fn test_rows_take_precedence_over_columns() {
        // Not reachable in play, but the order must be deterministic.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(detect(&board).map(|o| o.line), Some([0, 1, 2]));
    }
}
