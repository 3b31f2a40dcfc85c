//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::detect;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board with no winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && detect(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    fn fill(order: &[usize]) -> Board {
        order
            .iter()
            .enumerate()
            .fold(Board::new(), |board, (turn, &pos)| {
                board.with_mark(pos, Player::for_move(turn)).unwrap()
            })
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(&[4]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = fill(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completes the 0-4-8 diagonal last.
        let board = fill(&[0, 1, 2, 3, 4, 6, 7, 5, 8]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
