//! Tic-tac-toe against the computer.
//!
//! This crate holds everything with real game logic and nothing that
//! renders it:
//!
//! - **Board**: nine squares, legality of placements, terminal detection
//! - **Engine**: exhaustive minimax with three difficulty strategies
//! - **Controller**: turn order for one human-vs-computer match
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_tictactoe::{Difficulty, Mark, MatchConfig, MatchController, MatchState, Side};
//!
//! let config = MatchConfig::new(Mark::X, Side::Human, Difficulty::Optimal);
//! let mut game = MatchController::new(config);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! game.submit_human_move(4).unwrap();
//! let reply = game.request_computer_move(&mut rng).unwrap().unwrap();
//! assert_eq!(reply.placed.index(), 0);
//! assert_eq!(*game.state(), MatchState::AwaitingHumanMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod difficulty;
pub mod engine;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use controller::{MatchConfig, MatchController, MoveReport};
pub use difficulty::Difficulty;
pub use engine::{Engine, EngineConfig, choose_move};
pub use phases::{Finish, MatchState, Outcome, Side};
pub use position::Position;
pub use rules::{LINES, Line, is_full, line_winner, winning_line};
pub use types::{Board, CELLS, Mark, Square};
