//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::controller::MatchController;
use crate::types::Board;

/// Invariant: replaying the history onto an empty board reproduces the board.
///
/// Each history entry must land on a square that was still empty, so a
/// square that was overwritten or cleared breaks the replay.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchController> for MonotonicBoardInvariant {
    fn holds(game: &MatchController) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.place(mov.index(), *mov.mark()).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
