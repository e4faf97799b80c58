//! Turn sequencing between the human and the computer.

use crate::players::{Command, Player};
use anyhow::Result;
use tictactoe_core::{Board, GameState, MarkAssignment, MoveError, Outcome, Side};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Session opened with the given mark assignment.
    Started {
        /// Side-to-mark binding for this session.
        marks: MarkAssignment,
    },
    /// A move was applied.
    BoardChanged {
        /// Board after the move.
        board: Board,
        /// Side to move next.
        to_move: Side,
    },
    /// The computer is picking its move.
    Thinking,
    /// A selection was rejected; carries the re-prompt message.
    Status(String),
    /// The game is decided.
    Finished {
        /// Final board.
        board: Board,
        /// Terminal outcome.
        outcome: Outcome,
    },
    /// The user quit; exit without a result.
    Aborted,
}

/// Drives alternating turns until the game is decided or the user quits.
///
/// The loop owns the only mutable [`GameState`]; the UI sees snapshots
/// shipped over the event channel. A rejected selection re-prompts the
/// same side, so the turn only passes on a successfully applied move.
pub struct Orchestrator {
    game: GameState,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator over an initial game state.
    pub fn new(
        game: GameState,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game,
            human,
            computer,
            event_tx,
        }
    }

    /// Runs the turn loop to completion or until a quit.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        info!("starting game");
        self.event_tx.send(GameEvent::Started {
            marks: self.game.marks(),
        })?;
        self.event_tx.send(GameEvent::BoardChanged {
            board: self.game.board().clone(),
            to_move: self.game.to_move(),
        })?;

        loop {
            match self.game.outcome() {
                Outcome::InProgress => {}
                outcome => {
                    info!(?outcome, "game over");
                    self.event_tx.send(GameEvent::Finished {
                        board: self.game.board().clone(),
                        outcome,
                    })?;
                    return Ok(());
                }
            }

            let side = self.game.to_move();
            let mark = self.game.marks().mark_of(side);
            let player = match side {
                Side::Human => &mut self.human,
                Side::Computer => {
                    self.event_tx.send(GameEvent::Thinking)?;
                    &mut self.computer
                }
            };
            let name = player.name().to_string();

            debug!(%side, %mark, "waiting for move");
            let command = player.next_command(&self.game).await?;

            match command {
                Command::Quit => {
                    info!("user quit");
                    self.event_tx.send(GameEvent::Aborted)?;
                    return Ok(());
                }
                Command::Place(position) => match self.game.place_mark(position, mark) {
                    Ok(()) => {
                        debug!(player = %name, position, "move applied");
                        self.event_tx.send(GameEvent::BoardChanged {
                            board: self.game.board().clone(),
                            to_move: self.game.to_move(),
                        })?;
                    }
                    // A rejected selection does not consume the turn.
                    Err(e @ (MoveError::InvalidPosition(_) | MoveError::CellOccupied(_))) => {
                        warn!(position, error = %e, "selection rejected");
                        self.event_tx.send(GameEvent::Status(format!("{e}.")))?;
                    }
                    Err(e) => return Err(e.into()),
                },
            }
        }
    }
}
