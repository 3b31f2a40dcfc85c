//! Alternating turn invariant: X and O take turns, X first.

use super::super::{GameState, Player};
use super::{Invariant, placed_square};

/// Invariant: the mark placed at step `i + 1` belongs to X when `i` is
/// even and to O when `i` is odd.
///
/// Steps that do not place exactly one mark are left to
/// [`HistoryConsistentInvariant`](super::HistoryConsistentInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match pair {
                [before, after] => placed_square(before, after)
                    .is_none_or(|(_, player)| player == Player::for_move(step)),
                _ => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns, X first"
    }
}
