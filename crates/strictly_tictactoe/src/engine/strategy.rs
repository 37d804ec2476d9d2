//! Move selection procedures, one per difficulty.

use super::minimax::{Sides, root_scores};
use crate::position::Position;
use crate::types::Board;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

/// Highest-scoring empty square; the lowest index wins ties.
pub fn best_move(board: &Board, sides: Sides) -> Option<Position> {
    let mut best: Option<(usize, i32)> = None;
    for (index, value) in root_scores(board, sides) {
        trace!(index, value, "Scored reply");
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((index, value));
        }
    }
    best.and_then(|(index, _)| Position::from_index(index))
}

/// Lowest-scoring empty square; the lowest index wins ties.
pub fn worst_move(board: &Board, sides: Sides) -> Option<Position> {
    let mut worst: Option<(usize, i32)> = None;
    for (index, value) in root_scores(board, sides) {
        trace!(index, value, "Scored reply");
        if worst.is_none_or(|(_, bottom)| value < bottom) {
            worst = Some((index, value));
        }
    }
    worst.and_then(|(index, _)| Position::from_index(index))
}

/// Uniformly random empty square.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = Position::valid_moves(board);
    empty.choose(rng).copied()
}

/// Optimal when a draw from `[0, 10)` exceeds `threshold`, random otherwise.
pub fn blended_move<R: Rng + ?Sized>(
    board: &Board,
    sides: Sides,
    threshold: u32,
    rng: &mut R,
) -> Option<Position> {
    let roll: u32 = rng.random_range(0..10);
    if roll > threshold {
        trace!(roll, threshold, "Blend chose search");
        best_move(board, sides)
    } else {
        trace!(roll, threshold, "Blend chose random");
        random_move(board, rng)
    }
}
