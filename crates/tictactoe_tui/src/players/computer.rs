//! Computer player picking a uniformly random empty cell.

use super::{Command, Player};
use anyhow::Result;
use std::time::Duration;
use tictactoe_core::{GameState, choose_move};
use tracing::debug;

/// Pause before the computer moves, so the turn reads as deliberation.
const THINKING_DELAY: Duration = Duration::from_secs(1);

/// Computer opponent with uniformly random move selection.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn next_command(&mut self, game: &GameState) -> Result<Command> {
        // The sleep runs on the orchestrator task, so aborting that task
        // cancels it mid-delay.
        tokio::time::sleep(THINKING_DELAY).await;

        match choose_move(game.board(), &mut rand::rng()) {
            Some(position) => {
                debug!(player = %self.name, position, "computer chose cell");
                Ok(Command::Place(position))
            }
            // The loop checks the outcome before asking, so a full board
            // never reaches this point.
            None => anyhow::bail!("no empty cells left"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
