//! Move validation errors.

use derive_more::Display;

/// Error returned when a mark cannot be placed.
///
/// `InvalidPosition` and `CellOccupied` are recoverable: the session
/// re-prompts and the turn is not consumed. `GameOver` marks the session
/// as terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The selection is outside the 1-9 range.
    #[display("{} is not a cell on the board, pick 1-9", _0)]
    InvalidPosition(usize),

    /// The selected cell already holds a mark.
    #[display("Cell {} is already taken, pick another", _0)]
    CellOccupied(usize),

    /// The game has already been decided.
    #[display("The game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
