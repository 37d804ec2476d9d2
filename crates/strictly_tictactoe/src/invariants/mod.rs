//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The controller checks them in debug builds; they can also be
//! tested on their own.

pub mod alternating_turn;
pub mod balanced_marks;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use crate::action::MoveError;
use tracing::warn;

/// A property of `S` that every accepted move must preserve.
pub trait Invariant<S> {
    /// Whether the property holds.
    fn holds(state: &S) -> bool;

    /// What the property promises, used in violation reports.
    fn description() -> &'static str;
}

/// Invariants checked as one unit.
pub trait InvariantSet<S> {
    /// Descriptions of every member that does not hold, in order.
    fn violated(state: &S) -> Vec<&'static str>;

    /// Folds all violations into a single [`MoveError::InvariantViolation`].
    fn check_all(state: &S) -> Result<(), MoveError> {
        let violated = Self::violated(state);
        if violated.is_empty() {
            return Ok(());
        }
        warn!(?violated, "Postcondition failed");
        Err(MoveError::InvariantViolation(format!(
            "Postcondition failed: {}",
            violated.join("; ")
        )))
    }
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn violated(state: &S) -> Vec<&'static str> {
        [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ]
        .into_iter()
        .filter_map(|(holds, description)| (!holds).then_some(description))
        .collect()
    }
}

/// Every match invariant as a composable set.
pub type MatchInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    BalancedMarksInvariant,
);
