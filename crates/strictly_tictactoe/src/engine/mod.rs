//! Computer decision engine.
//!
//! The engine picks a square for the computer given the board, both marks
//! and a [`Difficulty`]. All three difficulties share one exhaustive
//! minimax search ([`minimax`]); they differ only in how the scored
//! replies are turned into a choice ([`strategy`]).
//!
//! Randomness is injected so callers can seed it:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_tictactoe::{Board, Difficulty, Mark, Position, choose_move};
//!
//! let mut board = Board::new();
//! board.place(0, Mark::X).unwrap();
//! board.place(1, Mark::X).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let choice = choose_move(&board, Mark::O, Mark::X, Difficulty::Optimal, &mut rng);
//! assert_eq!(choice, Some(Position::TopRight));
//! ```

pub mod minimax;
pub mod strategy;

use crate::difficulty::Difficulty;
use crate::position::Position;
use crate::types::{Board, CELLS, Mark};
use derive_getters::Getters;
use minimax::Sides;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tunables for the decision engine.
///
/// The defaults reproduce the standard behaviour exactly; the opening
/// shortcuts are opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct EngineConfig {
    /// Blended plays the searched move when a roll in `[0, 10)` exceeds this.
    blend_threshold: u32,
    /// Optimal takes the center of an empty board without searching.
    open_center: bool,
    /// Weak plays randomly while 8 or more squares are empty.
    weak_random_opening: bool,
}

impl EngineConfig {
    /// Creates a configuration with every field explicit.
    pub fn new(blend_threshold: u32, open_center: bool, weak_random_opening: bool) -> Self {
        Self {
            blend_threshold,
            open_center,
            weak_random_opening,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            blend_threshold: 4,
            open_center: false,
            weak_random_opening: false,
        }
    }
}

/// Decision engine holding its configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Chooses a square for `computer` to play.
    ///
    /// Returns `None` only when the board has no empty square. When the
    /// selected strategy produces nothing, a random empty square is used.
    #[instrument(skip(self, board, rng), fields(empty = board.empty_indices().count()))]
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        computer: Mark,
        human: Mark,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Option<Position> {
        let sides = Sides { computer, human };
        let empty = board.empty_indices().count();

        let choice = match difficulty {
            Difficulty::Optimal => {
                if self.config.open_center && empty == CELLS {
                    Some(Position::Center)
                } else {
                    strategy::best_move(board, sides)
                }
            }
            Difficulty::Weak => {
                if self.config.weak_random_opening && empty >= CELLS - 1 {
                    strategy::random_move(board, rng)
                } else {
                    strategy::worst_move(board, sides)
                }
            }
            Difficulty::Blended => {
                strategy::blended_move(board, sides, self.config.blend_threshold, rng)
            }
        };

        let choice = choice.or_else(|| strategy::random_move(board, rng));
        debug!(?choice, "Engine chose move");
        choice
    }
}

/// Chooses a square with the default engine configuration.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    human: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    Engine::default().choose_move(board, computer, human, difficulty, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_open_center_shortcut() {
        let engine = Engine::new(EngineConfig::new(4, true, false));
        let mut rng = StdRng::seed_from_u64(3);
        let choice = engine.choose_move(&Board::new(), Mark::X, Mark::O, Difficulty::Optimal, &mut rng);
        assert_eq!(choice, Some(Position::Center));
    }

    #[test]
    fn test_default_optimal_searches_empty_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let choice = choose_move(&Board::new(), Mark::X, Mark::O, Difficulty::Optimal, &mut rng);
        assert_eq!(choice, Some(Position::TopLeft));
    }

    #[test]
    fn test_threshold_nine_always_plays_randomly() {
        // Only 2 blocks the X threat; pure random play must miss it sometimes.
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        let engine = Engine::new(EngineConfig::new(9, false, false));

        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pos = engine
                .choose_move(&board, Mark::O, Mark::X, Difficulty::Blended, &mut rng)
                .unwrap();
            assert!(board.is_empty(pos.to_index()));
            seen.insert(pos);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"open_center": true}"#).unwrap();
        assert_eq!(config, EngineConfig::new(4, true, false));
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        let marks = [Mark::X, Mark::O, Mark::X, Mark::X, Mark::O, Mark::O, Mark::O, Mark::X, Mark::X];
        for (i, mark) in marks.into_iter().enumerate() {
            board.place(i, mark).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(0);
        for difficulty in [Difficulty::Weak, Difficulty::Blended, Difficulty::Optimal] {
            assert_eq!(choose_move(&board, Mark::O, Mark::X, difficulty, &mut rng), None);
        }
    }
}
