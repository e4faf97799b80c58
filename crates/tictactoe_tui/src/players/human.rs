//! Human player fed by input lines typed into the UI.

use super::{Command, Player};
use crate::input;
use crate::orchestrator::GameEvent;
use anyhow::Result;
use tictactoe_core::GameState;
use tokio::sync::mpsc;
use tracing::debug;

/// Human player reading submitted lines from the render loop.
pub struct HumanPlayer {
    name: String,
    line_rx: mpsc::UnboundedReceiver<String>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        line_rx: mpsc::UnboundedReceiver<String>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            line_rx,
            event_tx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn next_command(&mut self, _game: &GameState) -> Result<Command> {
        // Keep reading until a recognized command; unparsable lines get a
        // re-prompt message and do not end the turn.
        while let Some(line) = self.line_rx.recv().await {
            match input::parse(&line) {
                Some(command) => {
                    debug!(?command, "input accepted");
                    return Ok(command);
                }
                None => {
                    debug!(raw = %line, "input rejected");
                    let _ = self.event_tx.send(GameEvent::Status(format!(
                        "'{}' is not a cell number. Enter 1-9, or q to quit.",
                        line.trim()
                    )));
                }
            }
        }

        anyhow::bail!("input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
