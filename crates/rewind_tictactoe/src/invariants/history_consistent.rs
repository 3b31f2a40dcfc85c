//! History consistency invariant: each board grows from the previous one
//! by a single legal placement.

use super::super::rules::{detect, is_full};
use super::super::{Board, GameState};
use super::{Invariant, placed_square};

/// Invariant: history starts empty and each step places exactly one mark.
///
/// - `history[0]` is the empty board
/// - `history[i + 1]` differs from `history[i]` in exactly one square,
///   which went from empty to occupied
/// - no board follows a won or full board
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.first() != Some(&Board::new()) {
            return false;
        }

        history.windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            detect(before).is_none()
                && !is_full(before)
                && placed_square(before, after).is_some()
        })
    }

    fn description() -> &'static str {
        "History starts empty and each board adds exactly one mark to an unfinished board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let state = GameState::replay(&[0, 4, 1, 5, 2]);
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_violates() {
        let state = GameState {
            history: Vec::new(),
            current_move: 0,
        };
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut state = GameState::replay(&[0]);
        state.history[1] = state.history[1].with_mark(8, Player::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state = GameState::replay(&[0, 4]);
        state.history[2] = state.history[1].with_mark(0, Player::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut state = GameState::replay(&[0, 4, 1, 5, 2]);
        let last = *state.current_board();
        state.history.push(last.with_mark(8, Player::O).unwrap());
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
