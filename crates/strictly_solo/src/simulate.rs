//! Headless matches between the computer and a scripted opponent.

use crate::scoreboard::Scoreboard;
use anyhow::{Context, Result};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::str::FromStr;
use strictly_tictactoe::{
    Difficulty, Engine, Mark, MatchConfig, MatchController, Outcome, Position, Side,
};
use tracing::{debug, info, instrument};

/// The scripted side of a simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Uniformly random legal moves.
    Random,
    /// Another engine at the given difficulty.
    Engine(Difficulty),
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opponent::Random => write!(f, "random"),
            Opponent::Engine(difficulty) => write!(f, "{}", difficulty),
        }
    }
}

impl FromStr for Opponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(Opponent::Random);
        }
        Difficulty::from_str(s.trim())
            .map(Opponent::Engine)
            .map_err(|_| format!("Unknown opponent '{}' (random, weak, blended, optimal)", s))
    }
}

/// Result of a simulation run, from the opponent's seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SimulationReport {
    games: u32,
    difficulty: Difficulty,
    opponent: Opponent,
    seed: Option<u64>,
    scoreboard: Scoreboard,
}

impl SimulationReport {
    /// Matches the computer lost.
    pub fn computer_losses(&self) -> u32 {
        *self.scoreboard.human_wins()
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} games: computer ({}) vs {}",
            self.games, self.difficulty, self.opponent
        )?;
        write!(
            f,
            "Computer wins {} - Opponent wins {} - Draws {}",
            self.scoreboard.computer_wins(),
            self.scoreboard.human_wins(),
            self.scoreboard.draws()
        )
    }
}

/// Plays `games` matches, alternating who opens.
///
/// The opponent takes the human seat and always plays X. With a `seed` the
/// whole run is reproducible.
#[instrument(skip(engine))]
pub fn run_simulation(
    engine: &Engine,
    difficulty: Difficulty,
    opponent: Opponent,
    games: u32,
    seed: Option<u64>,
) -> Result<SimulationReport> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut scoreboard = Scoreboard::default();

    for game_number in 0..games {
        let starting = if game_number % 2 == 0 {
            Side::Human
        } else {
            Side::Computer
        };
        let config = MatchConfig::new(Mark::X, starting, difficulty);
        let outcome = play_one(engine, config, opponent, &mut rng)
            .with_context(|| format!("Simulated game {} failed", game_number + 1))?;
        debug!(game = game_number + 1, %outcome, "Game finished");
        scoreboard.record(outcome);
    }

    info!(%scoreboard, "Simulation complete");
    Ok(SimulationReport {
        games,
        difficulty,
        opponent,
        seed,
        scoreboard,
    })
}

fn play_one<R: Rng>(
    engine: &Engine,
    config: MatchConfig,
    opponent: Opponent,
    rng: &mut R,
) -> Result<Outcome> {
    let mut game = MatchController::with_engine(config, engine.clone());

    while let Some(side) = game.to_move() {
        match side {
            Side::Computer => {
                game.request_computer_move(rng)?
                    .context("Computer found no move on an open board")?;
            }
            Side::Human => {
                let pos = opponent_move(engine, &game, opponent, rng)
                    .context("Opponent found no move on an open board")?;
                game.submit_human_move(pos.to_index())?;
            }
        }
    }

    game.outcome().context("Match ended without an outcome")
}

fn opponent_move<R: Rng>(
    engine: &Engine,
    game: &MatchController,
    opponent: Opponent,
    rng: &mut R,
) -> Option<Position> {
    let config = game.config();
    match opponent {
        Opponent::Random => Position::valid_moves(game.board()).choose(rng).copied(),
        Opponent::Engine(difficulty) => engine.choose_move(
            game.board(),
            *config.human(),
            config.computer(),
            difficulty,
            rng,
        ),
    }
}
