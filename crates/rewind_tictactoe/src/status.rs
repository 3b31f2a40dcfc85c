//! Read-only projections of a [`GameState`].
//!
//! Nothing here is stored: status, disabled flags and history labels are
//! recomputed from the viewed board on every query.

use super::machine::GameState;
use super::rules::{detect, is_full};
use super::types::{BOARD_SIZE, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A player holds a full line.
    Win {
        /// The winning player.
        winner: Player,
        /// Indices of the winning line.
        line: [usize; 3],
    },
    /// Board full, no line.
    Draw,
    /// Game continues.
    InProgress {
        /// The player to move.
        next: Player,
    },
}

impl Status {
    /// Derives the status of `board` reached after `move_number` moves.
    #[instrument(skip(board))]
    pub fn of(board: &Board, move_number: usize) -> Self {
        match detect(board) {
            Some(outcome) => Status::Win {
                winner: outcome.winner,
                line: outcome.line,
            },
            None if is_full(board) => Status::Draw,
            None => Status::InProgress {
                next: Player::for_move(move_number),
            },
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Win { winner, .. } => write!(f, "Winner: {}", winner),
            Status::Draw => write!(f, "It's a draw!"),
            Status::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryLabel {
    /// Index into the history.
    pub move_index: usize,
    /// Whether this entry is the one being viewed.
    pub is_current: bool,
}

impl std::fmt::Display for HistoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.move_index, self.is_current) {
            (0, true) => write!(f, "Game Start"),
            (0, false) => write!(f, "Go to game start"),
            (n, true) => write!(f, "Current Move #{}", n),
            (n, false) => write!(f, "Go to move #{}", n),
        }
    }
}

/// Everything a front end needs to draw the game, derived in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    /// Status of the viewed board.
    pub status: Status,
    /// Per-square input flag; all set once the game is over.
    pub disabled: [bool; BOARD_SIZE],
    /// One label per history entry.
    pub history: Vec<HistoryLabel>,
}

impl GameState {
    /// Status of the viewed board.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> Status {
        Status::of(self.current_board(), self.current_move)
    }

    /// Whether input on square `index` should be refused.
    ///
    /// True for every square once the game is won or drawn, filled or not.
    /// Indices off the board are always disabled.
    #[instrument(skip(self))]
    pub fn is_cell_disabled(&self, index: usize) -> bool {
        index >= BOARD_SIZE || self.status().is_over()
    }

    /// The winning line of the viewed board, for highlighting.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        detect(self.current_board()).map(|outcome| outcome.line)
    }

    /// Labels for every history entry, relative to the viewed move.
    pub fn history_labels(&self) -> Vec<HistoryLabel> {
        (0..self.history.len())
            .map(|move_index| HistoryLabel {
                move_index,
                is_current: move_index == self.current_move,
            })
            .collect()
    }

    /// Status, disabled flags and history labels together.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn derived_status(&self) -> StatusView {
        let status = self.status();
        StatusView {
            status,
            disabled: [status.is_over(); BOARD_SIZE],
            history: self.history_labels(),
        }
    }
}
