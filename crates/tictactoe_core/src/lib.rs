//! Pure tic-tac-toe game logic.
//!
//! This crate owns everything about the game itself and nothing about the
//! terminal: the 3x3 board, the session's side-to-mark binding, turn
//! sequencing, win and draw detection, and the random move selection used
//! by the computer opponent. Presentation and input live in the
//! `tictactoe_tui` binary, which drives this crate through [`GameState`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod computer;
mod error;
mod game;
mod rules;
mod types;

pub use computer::{choose_move, empty_cells};
pub use error::MoveError;
pub use game::GameState;
pub use rules::{evaluate, winner};
pub use types::{Board, Cell, Mark, MarkAssignment, Outcome, Side};
