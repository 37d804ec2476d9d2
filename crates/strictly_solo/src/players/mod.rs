//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, parse_turn};

use anyhow::Result;
use strictly_tictactoe::{MatchController, Position};

/// What a player wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Place a mark on this square.
    Play(Position),
    /// Abandon the board and start a new match.
    Restart,
    /// Leave the session.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Trait for participants that produce turns.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next turn from this player.
    async fn next_turn(&mut self, game: &MatchController) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
