//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who placed
//! which mark where and are what the controller reports outward.

use crate::phases::Side;
use crate::position::Position;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A placed mark: the side that moved, its mark and the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Move {
    /// Side that made the move.
    side: Side,
    /// Mark that was placed.
    mark: Mark,
    /// Square the mark was placed on.
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, mark: Mark, position: Position) -> Self {
        Self {
            side,
            mark,
            position,
        }
    }

    /// Board index of this move.
    pub fn index(&self) -> usize {
        self.position.to_index()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.side, self.mark, self.position.label())
    }
}

/// An illegal move. Every variant is recoverable and leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The match is already over.
    #[display("Game is already over")]
    GameOver,

    /// It is not this side's turn.
    #[display("It's not the {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Side),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
