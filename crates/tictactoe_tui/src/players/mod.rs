//! Move providers for each side.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use tictactoe_core::GameState;

/// What a player wants to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the side's mark at the 1-based cell position.
    Place(usize),
    /// Stop the session immediately.
    Quit,
}

/// A source of commands for one side.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Produces the next command for this side.
    async fn next_command(&mut self, game: &GameState) -> Result<Command>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
