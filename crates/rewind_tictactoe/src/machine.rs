//! The game state machine: branching history and time travel.
//!
//! A [`GameState`] is a value. Every operation borrows the current state
//! and returns the next one, so any UI binding (re-render call, store,
//! signal) can hold it without the engine caring how.

use super::action::MoveError;
use super::invariants::{GameStateInvariants, InvariantSet, describe};
use super::rules::{detect, is_full};
use super::types::{BOARD_SIZE, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: every board along the current timeline plus the
/// position being viewed.
///
/// Invariants (checked by [`GameStateInvariants`]):
/// - `history[0]` is the empty board
/// - each board differs from its predecessor by one newly placed mark,
///   X on even steps and O on odd ones, and no mark follows a finished board
/// - `current_move < history.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a new game: a single empty board, viewing move 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Returns a brand-new game, independent of any previous state.
    #[instrument]
    pub fn reset() -> Self {
        debug!("Resetting game");
        Self::new()
    }

    /// Returns the board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns the index of the move being viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the player to move at the current position.
    pub fn current_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Returns every board along the current timeline.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Places the current player's mark at `index`, reporting why not if
    /// the move is illegal.
    ///
    /// Playing from an earlier point in history discards every board after
    /// the current one before the new board is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::GameOver`] if the current board is won or full
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_apply_move(&self, index: usize) -> Result<Self, MoveError> {
        let board = self.current_board();

        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds(index));
        }
        if !board.is_empty(index) {
            return Err(MoveError::SquareOccupied(index));
        }
        if detect(board).is_some() || is_full(board) {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player();
        let next = board
            .with_mark(index, player)
            .ok_or(MoveError::OutOfBounds(index))?;

        let mut history = self.history[..=self.current_move].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(next);

        let after = Self {
            current_move: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        GameStateInvariants::check_all(&after).map_err(|violations| {
            let descriptions = describe(&violations);
            tracing::warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        debug!(index, %player, discarded, "Move applied");
        Ok(after)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Illegal moves are dropped: the returned state equals `self`.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&self, index: usize) -> Self {
        self.try_apply_move(index).unwrap_or_else(|error| {
            debug!(%error, "Move dropped");
            self.clone()
        })
    }

    /// Moves the view to `move_index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoSuchMove`] if the history has no such entry.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn try_jump_to(&self, move_index: usize) -> Result<Self, MoveError> {
        if move_index >= self.history.len() {
            return Err(MoveError::NoSuchMove(move_index));
        }
        Ok(Self {
            history: self.history.clone(),
            current_move: move_index,
        })
    }

    /// Moves the view to `move_index`. Out-of-range indices are dropped.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&self, move_index: usize) -> Self {
        self.try_jump_to(move_index).unwrap_or_else(|error| {
            debug!(%error, "Jump dropped");
            self.clone()
        })
    }

    /// Replays `indices` from a fresh game, dropping illegal ones.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        indices
            .iter()
            .fold(Self::new(), |state, &index| state.apply_move(index))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire shape of a [`GameState`]; validated on the way in.
#[derive(Debug, Deserialize)]
struct GameStateRecord {
    history: Vec<Board>,
    current_move: usize,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = MoveError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let state = GameState {
            history: record.history,
            current_move: record.current_move,
        };
        GameStateInvariants::check_all(&state)
            .map_err(|violations| MoveError::InvariantViolation(describe(&violations)))?;
        Ok(state)
    }
}
