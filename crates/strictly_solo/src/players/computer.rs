//! Computer player running the engine on a blocking worker.

use super::{Player, Turn};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use strictly_tictactoe::{Engine, MatchController};
use tracing::{debug, instrument};

/// Computer player backed by the decision engine.
pub struct ComputerPlayer {
    name: String,
    engine: Engine,
    rng: StdRng,
    think: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player.
    ///
    /// A `seed` makes every choice reproducible; without one the player
    /// seeds itself from the operating system.
    pub fn new(name: impl Into<String>, engine: Engine, seed: Option<u64>, think: Duration) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: name.into(),
            engine,
            rng,
            think,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn next_turn(&mut self, game: &MatchController) -> Result<Turn> {
        debug!("Computer thinking");
        if !self.think.is_zero() {
            tokio::time::sleep(self.think).await;
        }

        // The search runs on a private copy of the board.
        let engine = self.engine.clone();
        let board = game.board().clone();
        let config = *game.config();
        let seed: u64 = self.rng.random();

        let choice = tokio::task::spawn_blocking(move || {
            let mut rng = StdRng::seed_from_u64(seed);
            engine.choose_move(
                &board,
                config.computer(),
                *config.human(),
                *config.difficulty(),
                &mut rng,
            )
        })
        .await?;

        match choice {
            Some(pos) => {
                debug!(position = %pos, "Computer chose position");
                Ok(Turn::Play(pos))
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
