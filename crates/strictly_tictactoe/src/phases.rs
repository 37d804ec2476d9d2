//! Sides, match states and outcomes.

use crate::rules::Line;
use serde::{Deserialize, Serialize};

/// Which participant is acting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Side {
    /// The human player.
    Human,
    /// The decision engine.
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Outcome for a line completed by `side`.
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Human => Outcome::HumanWin,
            Side::Computer => Outcome::ComputerWin,
        }
    }

    /// Returns the winning side if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::HumanWin => Some(Side::Human),
            Outcome::ComputerWin => Some(Side::Computer),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::HumanWin => write!(f, "Human wins"),
            Outcome::ComputerWin => write!(f, "Computer wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Terminal report: the outcome and the line to highlight.
///
/// `line` is `None` exactly when the outcome is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finish {
    /// How the match ended.
    pub outcome: Outcome,
    /// The completed line, if any.
    pub line: Option<Line>,
}

/// Where the match controller is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for the human to submit a square.
    AwaitingHumanMove,
    /// Waiting for the engine's choice.
    AwaitingComputerMove,
    /// Match over; no further moves accepted.
    Terminal(Outcome),
}

impl MatchState {
    /// State in which `side` is the one to move.
    pub fn awaiting(side: Side) -> Self {
        match side {
            Side::Human => MatchState::AwaitingHumanMove,
            Side::Computer => MatchState::AwaitingComputerMove,
        }
    }

    /// Side expected to move next, `None` once terminal.
    pub fn to_move(&self) -> Option<Side> {
        match self {
            MatchState::AwaitingHumanMove => Some(Side::Human),
            MatchState::AwaitingComputerMove => Some(Side::Computer),
            MatchState::Terminal(_) => None,
        }
    }

    /// Returns true once the match has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchState::Terminal(_))
    }
}
