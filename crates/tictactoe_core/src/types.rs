//! Core domain types for tic-tac-toe.

use rand::Rng;
use strum::Display;

/// A mark placed in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nothing placed yet.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), &'static str> {
        if index >= 9 {
            return Err("index out of bounds");
        }
        self.cells[index] = cell;
        Ok(())
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A side in the session: the human at the keyboard or the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    /// The player at the keyboard.
    Human,
    /// The random-move opponent.
    Computer,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// The session's side-to-mark binding.
///
/// Drawn once at game start and fixed for the whole session. The two
/// sides always hold complementary marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkAssignment {
    human: Mark,
}

impl MarkAssignment {
    /// Draws the assignment with an unbiased coin flip.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let human = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
        Self { human }
    }

    /// Fixed assignment with the human holding the given mark.
    pub fn with_human(human: Mark) -> Self {
        Self { human }
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// The computer's mark.
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }

    /// The mark held by the given side.
    pub fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human,
            Side::Computer => self.human.opponent(),
        }
    }

    /// The side holding the given mark.
    pub fn side_of(&self, mark: Mark) -> Side {
        if mark == self.human {
            Side::Human
        } else {
            Side::Computer
        }
    }
}

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A line of three is complete.
    Won(Mark),
    /// Full board with no complete line.
    Draw,
}

impl Outcome {
    /// Whether the session is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
