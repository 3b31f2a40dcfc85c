//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. They know nothing about history
//! or whose turn it is, so the state machine and any UI can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{detect, Outcome, WINNING_LINES};
