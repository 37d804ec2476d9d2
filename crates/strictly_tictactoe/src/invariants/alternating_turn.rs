//! Alternating turn invariant: sides take turns, starting side first.

use super::Invariant;
use crate::controller::MatchController;

/// Invariant: the history alternates sides and opens with the starting side.
///
/// Each entry's mark must be the one its side plays, and while the match
/// is running the side to move is the one after the last entry.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchController> for AlternatingTurnInvariant {
    fn holds(game: &MatchController) -> bool {
        let config = game.config();
        let history = game.history();

        if history
            .iter()
            .any(|mov| config.mark_of(*mov.side()) != *mov.mark())
        {
            return false;
        }

        if let Some(first) = history.first()
            && *first.side() != *config.starting()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].side() == w[1].side()) {
            return false;
        }

        match (game.to_move(), history.last()) {
            (None, _) => true,
            (Some(due), None) => due == *config.starting(),
            (Some(due), Some(last)) => due == last.side().other(),
        }
    }

    fn description() -> &'static str {
        "Sides alternate turns starting with the configured side"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, Mark, MatchConfig, Side};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_holds_through_a_full_match() {
        let mut game =
            MatchController::new(MatchConfig::new(Mark::X, Side::Computer, Difficulty::Optimal));
        let mut rng = StdRng::seed_from_u64(5);

        while game.to_move().is_some() {
            match game.to_move() {
                Some(Side::Computer) => {
                    game.request_computer_move(&mut rng).unwrap();
                }
                Some(Side::Human) => {
                    let index = game.board().empty_indices().next().unwrap();
                    game.submit_human_move(index).unwrap();
                }
                None => unreachable!(),
            }
            assert!(AlternatingTurnInvariant::holds(&game));
        }
    }
}
