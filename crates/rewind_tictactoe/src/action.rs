//! Reasons a requested transition was dropped.
//!
//! The plain state-machine operations swallow these and return the state
//! unchanged. The `try_*` variants hand them back so a front end can give
//! feedback on a rejected click.

/// Error that can occur when applying a move or jumping through history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not a square on the board.
    #[display("Square {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The current board is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The history has no entry at this index.
    #[display("There is no move #{} in the history", _0)]
    NoSuchMove(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
