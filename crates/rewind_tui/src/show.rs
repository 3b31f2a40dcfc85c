//! Non-interactive rendering: play a move list and print the result.

use rewind_tictactoe::GameState;
use std::fmt::Write;
use tracing::{instrument, warn};

/// Result of replaying a scripted move list.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Final state after all moves and the optional jump.
    pub state: GameState,
    /// One line per dropped move or jump.
    pub dropped: Vec<String>,
}

/// Plays `moves` from a fresh game, then jumps to `jump` if given.
///
/// Illegal moves are dropped exactly as the engine drops them; each one
/// is recorded so the caller can report it.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Replay {
    let mut state = GameState::new();
    let mut dropped = Vec::new();

    for &index in moves {
        match state.try_apply_move(index) {
            Ok(next) => state = next,
            Err(error) => {
                warn!(index, %error, "Move dropped");
                dropped.push(format!("Dropped move {}: {}", index, error));
            }
        }
    }

    if let Some(move_index) = jump {
        match state.try_jump_to(move_index) {
            Ok(next) => state = next,
            Err(error) => {
                warn!(move_index, %error, "Jump dropped");
                dropped.push(format!("Dropped jump: {}", error));
            }
        }
    }

    Replay { state, dropped }
}

/// Formats board, status and move list as plain text.
pub fn render_text(state: &GameState) -> String {
    let view = state.derived_status();
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", state.current_board());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.status);
    if let Some(line) = state.winning_line() {
        let _ = writeln!(out, "Winning line: {:?}", line);
    }
    let _ = writeln!(out);
    for label in &view.history {
        let marker = if label.is_current { '>' } else { ' ' };
        let _ = writeln!(out, "{} {}", marker, label);
    }
    out
}
