//! Tic-tac-toe with full move history and time travel.
//!
//! The engine is a set of pure transitions over an immutable
//! [`GameState`]:
//!
//! - [`GameState::apply_move`] places the current player's mark, dropping
//!   illegal moves, and truncates any "future" boards when playing from an
//!   earlier point in history
//! - [`GameState::jump_to`] moves the view to any recorded board
//! - [`GameState::reset`] starts over
//! - [`GameState::derived_status`] projects status, disabled squares and
//!   move-list labels for a front end
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Status};
//!
//! let state = GameState::new()
//!     .apply_move(0)
//!     .apply_move(4)
//!     .apply_move(1)
//!     .apply_move(5)
//!     .apply_move(2);
//!
//! assert_eq!(
//!     state.status(),
//!     Status::Win { winner: Player::X, line: [0, 1, 2] }
//! );
//!
//! // Rewind to the start and branch: the old timeline is gone.
//! let branched = state.jump_to(0).apply_move(4);
//! assert_eq!(branched.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod machine;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::MoveError;
pub use machine::GameState;
pub use position::Position;
pub use rules::{Outcome, detect};
pub use status::{HistoryLabel, Status, StatusView};
pub use types::{BOARD_SIZE, Board, Player, Square};
