//! Command-line interface for strictly_solo.

use crate::simulate::Opponent;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Difficulty, Mark, Side};

/// Strictly Solo - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_solo")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Mark you play (X or O)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Who opens each match (human or computer)
        #[arg(short, long)]
        first: Option<Side>,

        /// Computer strength (weak, blended, optimal; easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for reproducible computer play
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Run headless matches and report the tallies
    Simulate {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of matches
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Computer strength
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Opponent: random, or a difficulty name
        #[arg(short, long, default_value = "random")]
        opponent: Opponent,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
