//! Computer strength levels.

use serde::{Deserialize, Serialize};

/// How hard the computer tries.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum Difficulty {
    /// Plays the move with the lowest search score.
    #[strum(to_string = "weak", serialize = "easy")]
    #[serde(alias = "easy")]
    Weak,
    /// Optimal about half the time, random otherwise.
    #[default]
    #[strum(to_string = "blended", serialize = "medium")]
    #[serde(alias = "medium")]
    Blended,
    /// Plays the move with the highest search score.
    #[strum(to_string = "optimal", serialize = "hard")]
    #[serde(alias = "hard")]
    Optimal,
}
