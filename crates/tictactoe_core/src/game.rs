//! Authoritative game state and turn sequencing.

use crate::error::MoveError;
use crate::rules;
use crate::types::{Board, Cell, Mark, MarkAssignment, Outcome, Side};
use tracing::{debug, instrument};

/// Authoritative state for a single game session.
///
/// Owns the board, the side to move, and the session's mark assignment.
/// The human side always opens, independent of which mark it drew, and
/// the turn flips after every successfully applied move. Once the outcome
/// is terminal no further moves are accepted.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    to_move: Side,
    marks: MarkAssignment,
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game with the given mark assignment.
    #[instrument]
    pub fn new(marks: MarkAssignment) -> Self {
        Self {
            board: Board::new(),
            to_move: Side::Human,
            marks,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the session's mark assignment.
    pub fn marks(&self) -> MarkAssignment {
        self.marks
    }

    /// Returns the outcome as of the last applied move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Places `mark` at the 1-based cell `position`.
    ///
    /// On success exactly one cell is written, the outcome is recomputed
    /// and the turn passes to the other side. On error nothing changes.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the outcome is terminal,
    /// [`MoveError::InvalidPosition`] outside 1-9, and
    /// [`MoveError::CellOccupied`] when the cell already holds a mark.
    #[instrument(skip(self), fields(side = %self.to_move))]
    pub fn place_mark(&mut self, position: usize, mark: Mark) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let index = match position.checked_sub(1) {
            Some(index) if index < 9 => index,
            _ => return Err(MoveError::InvalidPosition(position)),
        };

        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(position));
        }

        self.board
            .set(index, Cell::Occupied(mark))
            .map_err(|_| MoveError::InvalidPosition(position))?;
        self.outcome = rules::evaluate(&self.board);
        self.to_move = self.to_move.opponent();

        debug!(position, outcome = ?self.outcome, "mark placed");
        Ok(())
    }

    /// Recomputes the outcome from the current board.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_opens_regardless_of_mark_draw() {
        for human_mark in [Mark::X, Mark::O] {
            let game = GameState::new(MarkAssignment::with_human(human_mark));
            assert_eq!(game.to_move(), Side::Human);
            assert_eq!(game.outcome(), Outcome::InProgress);
        }
    }

    #[test]
    fn successful_move_flips_turn() {
        let mut game = GameState::new(MarkAssignment::with_human(Mark::X));
        game.place_mark(5, Mark::X).unwrap();
        assert_eq!(game.to_move(), Side::Computer);
        game.place_mark(1, Mark::O).unwrap();
        assert_eq!(game.to_move(), Side::Human);
    }

    #[test]
    fn rejected_move_keeps_turn() {
        let mut game = GameState::new(MarkAssignment::with_human(Mark::X));
        game.place_mark(5, Mark::X).unwrap();
        let before = game.to_move();
        assert!(game.place_mark(5, Mark::O).is_err());
        assert_eq!(game.to_move(), before);
    }
}
