//! Running tallies across matches in one process.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Outcome, Side};

/// Wins, losses and draws from the human's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    human_wins: u32,
    computer_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Counts one finished match.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Side::Human) => self.human_wins += 1,
            Some(Side::Computer) => self.computer_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Matches counted so far.
    pub fn total(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - Computer {} - Draws {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}
