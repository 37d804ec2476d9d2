//! Strictly Solo - terminal tic-tac-toe against the computer.
//!
//! The rules, engine and match controller live in `strictly_tictactoe`;
//! this crate adds configuration, players reading from a terminal and a
//! headless simulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod play;
pub mod players;
pub mod scoreboard;
pub mod simulate;

pub use config::{CONFIG_ENV, ConfigError, SoloConfig};
pub use play::run_session;
pub use players::{ComputerPlayer, HumanPlayer, Player, Turn, parse_turn};
pub use scoreboard::Scoreboard;
pub use simulate::{Opponent, SimulationReport, run_simulation};
