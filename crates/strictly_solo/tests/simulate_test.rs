//! Tests for headless simulation.

use strictly_solo::{Opponent, run_simulation};
use strictly_tictactoe::{Difficulty, Engine, EngineConfig};

#[test]
fn test_optimal_never_loses_to_random() {
    let report = run_simulation(&Engine::default(), Difficulty::Optimal, Opponent::Random, 20, Some(11))
        .unwrap();

    assert_eq!(*report.games(), 20);
    assert_eq!(report.scoreboard().total(), 20);
    assert_eq!(report.computer_losses(), 0);
}

#[test]
fn test_weak_never_beats_optimal() {
    let report = run_simulation(
        &Engine::default(),
        Difficulty::Weak,
        Opponent::Engine(Difficulty::Optimal),
        4,
        Some(2),
    )
    .unwrap();

    assert_eq!(*report.scoreboard().computer_wins(), 0);
}

#[test]
fn test_seeded_runs_repeat() {
    let engine = Engine::new(EngineConfig::new(4, true, true));
    let a = run_simulation(&engine, Difficulty::Blended, Opponent::Random, 10, Some(99)).unwrap();
    let b = run_simulation(&engine, Difficulty::Blended, Opponent::Random, 10, Some(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_simulation(
        &Engine::default(),
        Difficulty::Optimal,
        Opponent::Engine(Difficulty::Blended),
        2,
        Some(5),
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["games"], 2);
    assert_eq!(json["difficulty"], "optimal");
    assert_eq!(json["opponent"]["engine"], "blended");
    assert_eq!(json["seed"], 5);
    assert_eq!(json["scoreboard"]["human_wins"], 0);
}

#[test]
fn test_zero_games_is_empty_report() {
    let report = run_simulation(&Engine::default(), Difficulty::Weak, Opponent::Random, 0, None).unwrap();
    assert_eq!(report.scoreboard().total(), 0);
    assert_eq!(*report.seed(), None);
}
