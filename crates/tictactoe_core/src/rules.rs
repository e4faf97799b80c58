//! Win and draw detection.

use crate::types::{Board, Cell, Mark, Outcome};
use tracing::instrument;

/// Cell indices of the eight winning lines, in scan order: rows, then
/// columns, then the left diagonal, then the right diagonal.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks for a completed line on the board.
///
/// The first fully matching line in scan order decides the winner.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();

    for [a, b, c] in LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            return match cell {
                Cell::Occupied(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }

    None
}

/// Evaluates the board: a completed line wins, a full board with no line
/// is a draw, anything else is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        return Outcome::Won(mark);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, indices: &[usize], mark: Mark) {
        for &index in indices {
            board.set(index, Cell::Occupied(mark)).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        // X X X / _ O _ / _ _ O
        let mut board = Board::new();
        mark(&mut board, &[0, 1, 2], Mark::X);
        mark(&mut board, &[4, 8], Mark::O);
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        mark(&mut board, &[1, 4, 7], Mark::O);
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_left_diagonal() {
        let mut board = Board::new();
        mark(&mut board, &[0, 4, 8], Mark::O);
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_right_diagonal() {
        let mut board = Board::new();
        mark(&mut board, &[2, 4, 6], Mark::X);
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        mark(&mut board, &[0, 1], Mark::X);
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        mark(&mut board, &[0, 1], Mark::X);
        mark(&mut board, &[2], Mark::O);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_no_line_is_draw() {
        // X O X / O X O / O X O
        let mut board = Board::new();
        mark(&mut board, &[0, 2, 4, 7], Mark::X);
        mark(&mut board, &[1, 3, 5, 6, 8], Mark::O);
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_won() {
        // X X X / O O X / O X O: full, top row complete.
        let mut board = Board::new();
        mark(&mut board, &[0, 1, 2, 5, 7], Mark::X);
        mark(&mut board, &[3, 4, 6, 8], Mark::O);
        assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
    }
}
