//! Balanced marks invariant: mark counts differ by at most one.

use super::Invariant;
use crate::controller::MatchController;

/// Invariant: the starting side has as many marks as the other, or one more.
pub struct BalancedMarksInvariant;

impl Invariant<MatchController> for BalancedMarksInvariant {
    fn holds(game: &MatchController) -> bool {
        let config = game.config();
        let first = config.mark_of(*config.starting());
        let second = config.mark_of(config.starting().other());
        let (a, b) = (game.board().count(first), game.board().count(second));
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one, favouring the starting side"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, Mark, MatchConfig, Side};

    #[test]
    fn test_extra_mark_for_second_side_violates() {
        let mut game =
            MatchController::new(MatchConfig::new(Mark::X, Side::Human, Difficulty::Blended));
        assert!(BalancedMarksInvariant::holds(&game));
        game.board_mut().set_mark(0, Mark::O);
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}
