//! Match controller: turn order and terminal detection.
//!
//! The controller owns the board for one match. The presentation layer
//! feeds it human squares and engine requests and renders the
//! [`MoveReport`]s it returns.

use crate::action::{Move, MoveError};
use crate::difficulty::Difficulty;
use crate::engine::Engine;
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::phases::{Finish, MatchState, Outcome, Side};
use crate::position::Position;
use crate::rules::{is_draw, winning_line};
use crate::types::{Board, Mark};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Per-match settings chosen before play starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MatchConfig {
    /// Mark the human plays; the computer plays the other.
    human: Mark,
    /// Side that moves first.
    starting: Side,
    /// Computer strength.
    difficulty: Difficulty,
}

impl MatchConfig {
    /// Creates a match configuration.
    pub fn new(human: Mark, starting: Side, difficulty: Difficulty) -> Self {
        Self {
            human,
            starting,
            difficulty,
        }
    }

    /// Mark the computer plays.
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }

    /// Mark belonging to a side.
    pub fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer(),
        }
    }

    /// Side playing a mark.
    pub fn side_of(&self, mark: Mark) -> Side {
        if mark == self.human {
            Side::Human
        } else {
            Side::Computer
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Mark::X, Side::Human, Difficulty::default())
    }
}

/// What an accepted move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The mark that was placed.
    pub placed: Move,
    /// Set when this move ended the match.
    pub finish: Option<Finish>,
}

/// Drives one human-vs-computer match at a time.
#[derive(Debug, Clone, Getters)]
pub struct MatchController {
    config: MatchConfig,
    engine: Engine,
    board: Board,
    state: MatchState,
    history: Vec<Move>,
    finish: Option<Finish>,
}

impl MatchController {
    /// Starts a match with the default engine.
    #[instrument]
    pub fn new(config: MatchConfig) -> Self {
        Self::with_engine(config, Engine::default())
    }

    /// Starts a match with a specific engine.
    #[instrument(skip(engine))]
    pub fn with_engine(config: MatchConfig, engine: Engine) -> Self {
        info!(
            human = %config.human,
            starting = %config.starting,
            difficulty = %config.difficulty,
            "Starting match"
        );
        Self {
            config,
            engine,
            board: Board::new(),
            state: MatchState::awaiting(config.starting),
            history: Vec::new(),
            finish: None,
        }
    }

    /// Replaces the configuration and starts a fresh match.
    #[instrument(skip(self))]
    pub fn configure_match(&mut self, config: MatchConfig) {
        self.config = config;
        self.reset_board();
    }

    /// Clears the board and restarts the current configuration.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        debug!("Resetting board");
        self.board.reset();
        self.history.clear();
        self.finish = None;
        self.state = MatchState::awaiting(self.config.starting);
    }

    /// Side expected to move, `None` once the match is over.
    pub fn to_move(&self) -> Option<Side> {
        self.state.to_move()
    }

    /// Outcome once the match has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.finish.map(|f| f.outcome)
    }

    /// Places the human's mark at `index`.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once terminal, [`MoveError::NotYourTurn`] while
    /// the computer is due, and the board's own rejections for bad squares.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        self.apply(Side::Human, index)
    }

    /// Asks the engine for a square and plays it.
    ///
    /// Returns `Ok(None)` when the board has no empty square left.
    #[instrument(skip(self, rng))]
    pub fn request_computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<MoveReport>, MoveError> {
        self.ensure_turn(Side::Computer)?;
        let choice = self.engine.choose_move(
            &self.board,
            self.config.computer(),
            self.config.human,
            self.config.difficulty,
            rng,
        );
        match choice {
            Some(pos) => self.apply(Side::Computer, pos.to_index()).map(Some),
            None => {
                warn!("Engine found no legal move");
                Ok(None)
            }
        }
    }

    /// Plays a square the engine chose elsewhere, e.g. on a worker thread.
    #[instrument(skip(self))]
    pub fn apply_computer_move(&mut self, pos: Position) -> Result<MoveReport, MoveError> {
        self.apply(Side::Computer, pos.to_index())
    }

    fn ensure_turn(&self, side: Side) -> Result<(), MoveError> {
        match self.state.to_move() {
            None => Err(MoveError::GameOver),
            Some(due) if due != side => Err(MoveError::NotYourTurn(side)),
            Some(_) => Ok(()),
        }
    }

    /// Stages the move on a copy and commits it only once every
    /// postcondition holds, so a rejected move leaves the match untouched.
    fn apply(&mut self, side: Side, index: usize) -> Result<MoveReport, MoveError> {
        self.ensure_turn(side)?;

        let mark = self.config.mark_of(side);
        let mut next = self.clone();
        next.board.place(index, mark)?;
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let placed = Move::new(side, mark, position);
        next.history.push(placed);

        let finish = if let Some((winner, line)) = winning_line(&next.board) {
            Some(Finish {
                outcome: Outcome::win_for(self.config.side_of(winner)),
                line: Some(line),
            })
        } else if is_draw(&next.board) {
            Some(Finish {
                outcome: Outcome::Draw,
                line: None,
            })
        } else {
            None
        };
        next.state = match finish {
            Some(f) => MatchState::Terminal(f.outcome),
            None => MatchState::awaiting(side.other()),
        };
        next.finish = finish;

        #[cfg(debug_assertions)]
        MatchInvariants::check_all(&next)?;

        *self = next;
        debug!(%placed, "Move accepted");
        if let Some(f) = finish {
            info!(outcome = %f.outcome, "Match finished");
        }
        Ok(MoveReport { placed, finish })
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
