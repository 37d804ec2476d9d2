//! Exhaustive game-tree search.
//!
//! Scores are from the computer's point of view: `10 - depth` for a
//! computer line, `depth - 10` for a human line, `0` for a full board.
//! Faster wins and slower losses therefore score higher.

use crate::rules::{has_line, is_full};
use crate::types::{Board, CELLS, Mark, Square};

/// Score awarded for a completed line before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// The two marks a search is run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides {
    /// Mark the search maximizes for.
    pub computer: Mark,
    /// Mark the search minimizes for.
    pub human: Mark,
}

/// Scores `board` by searching every remaining continuation.
///
/// `maximizing_for_computer` says whose turn it is at `board`. The board is
/// searched on a private copy and is never modified.
pub fn score(board: &Board, sides: Sides, depth: i32, maximizing_for_computer: bool) -> i32 {
    let mut scratch = board.clone();
    search(&mut scratch, sides, depth, maximizing_for_computer)
}

/// Scores each empty square as a computer reply, in ascending index order.
///
/// Each entry is the score of the position after the computer takes that
/// square, with the human to move next.
pub fn root_scores(board: &Board, sides: Sides) -> Vec<(usize, i32)> {
    let mut scratch = board.clone();
    let empties: Vec<usize> = board.empty_indices().collect();

    empties
        .into_iter()
        .map(|index| {
            scratch.set_mark(index, sides.computer);
            let value = search(&mut scratch, sides, 0, false);
            scratch.clear(index);
            (index, value)
        })
        .collect()
}

/// Place, recurse, undo. Terminal checks run computer line, human line, full.
fn search(board: &mut Board, sides: Sides, depth: i32, maximizing_for_computer: bool) -> i32 {
    if has_line(board, sides.computer) {
        return WIN_SCORE - depth;
    }
    if has_line(board, sides.human) {
        return depth - WIN_SCORE;
    }
    if is_full(board) {
        return 0;
    }

    let (mover, mut best) = if maximizing_for_computer {
        (sides.computer, i32::MIN)
    } else {
        (sides.human, i32::MAX)
    };

    for index in 0..CELLS {
        if board.get(index) != Some(Square::Empty) {
            continue;
        }
        board.set_mark(index, mover);
        let child = search(board, sides, depth + 1, !maximizing_for_computer);
        board.clear(index);

        best = if maximizing_for_computer {
            best.max(child)
        } else {
            best.min(child)
        };
    }

    best
}
