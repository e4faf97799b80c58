//! Application state for the render loop.

use crate::orchestrator::GameEvent;
use tictactoe_core::{Board, MarkAssignment, Outcome, Side};

const HUMAN_PROMPT: &str = "Your turn. Type a cell number (1-9) and press Enter, or q to quit.";

/// Where the session stands, from the UI's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Game running.
    Playing,
    /// Game decided; final board stays on screen until a key is pressed.
    Finished(Outcome),
    /// User quit; leave without a result.
    Aborted,
}

/// Render-side snapshot of the session, updated from orchestrator events.
pub struct App {
    board: Board,
    marks: MarkAssignment,
    to_move: Side,
    status: String,
    input: String,
    phase: Phase,
}

impl App {
    /// Creates the initial snapshot for a fresh game.
    pub fn new(marks: MarkAssignment) -> Self {
        Self {
            board: Board::new(),
            marks,
            to_move: Side::Human,
            status: HUMAN_PROMPT.to_string(),
            input: String::new(),
            phase: Phase::Playing,
        }
    }

    /// Current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The session's mark assignment.
    pub fn marks(&self) -> MarkAssignment {
        self.marks
    }

    /// Side to move, as of the last event.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Pending input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Applies an orchestrator event to the snapshot.
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started { marks } => self.marks = marks,
            GameEvent::BoardChanged { board, to_move } => {
                self.board = board;
                self.to_move = to_move;
                self.status = match to_move {
                    Side::Human => HUMAN_PROMPT.to_string(),
                    Side::Computer => "Computer's turn.".to_string(),
                };
            }
            GameEvent::Thinking => self.status = "Computer is thinking...".to_string(),
            GameEvent::Status(message) => self.status = message,
            GameEvent::Finished { board, outcome } => {
                self.board = board;
                self.status = format!(
                    "{} Press any key to exit.",
                    result_line(outcome, self.marks)
                );
                self.phase = Phase::Finished(outcome);
            }
            GameEvent::Aborted => self.phase = Phase::Aborted,
        }
    }

    /// Final result line, present once the game finished.
    pub fn summary(&self) -> Option<String> {
        match self.phase {
            Phase::Finished(outcome) => Some(result_line(outcome, self.marks)),
            _ => None,
        }
    }

    /// Takes the pending input buffer, leaving it empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Appends a typed character to the input buffer.
    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    /// Removes the last character from the input buffer.
    pub fn pop_input(&mut self) {
        self.input.pop();
    }
}

/// Text for the terminal outcome, from the human's perspective.
fn result_line(outcome: Outcome, marks: MarkAssignment) -> String {
    match outcome {
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::Won(mark) if mark == marks.human() => format!("You win with {mark}!"),
        Outcome::Won(mark) => format!("The computer wins with {mark}."),
        Outcome::InProgress => "Still playing.".to_string(),
    }
}
