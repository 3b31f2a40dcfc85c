//! Cursor invariant: the viewed move exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_move` indexes into the history.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_move < state.history.len()
    }

    fn description() -> &'static str {
        "Current move lies within the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jumps_stay_in_bounds() {
        let state = GameState::replay(&[0, 4, 8]);
        for target in 0..6 {
            assert!(CursorInBoundsInvariant::holds(&state.jump_to(target)));
        }
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut state = GameState::replay(&[0]);
        state.current_move = 2;
        assert!(!CursorInBoundsInvariant::holds(&state));
    }
}
