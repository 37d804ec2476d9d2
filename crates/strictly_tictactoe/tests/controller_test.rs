//! Tests for the match controller.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::{
    Board, Difficulty, LINES, Mark, MatchConfig, MatchController, MatchState, MoveError, Outcome,
    Position, Side,
};

fn human_first(difficulty: Difficulty) -> MatchController {
    MatchController::new(MatchConfig::new(Mark::X, Side::Human, difficulty))
}

#[test]
fn test_human_win_reports_line() {
    // Computer O is fed squares directly so the human can win.
    let mut game = human_first(Difficulty::Optimal);
    game.submit_human_move(0).unwrap();
    game.apply_computer_move(Position::MiddleLeft).unwrap();
    game.submit_human_move(1).unwrap();
    game.apply_computer_move(Position::Center).unwrap();
    let report = game.submit_human_move(2).unwrap();

    let finish = report.finish.expect("top row wins");
    assert_eq!(finish.outcome, Outcome::HumanWin);
    assert_eq!(finish.line, Some(LINES[0]));
    assert_eq!(*game.state(), MatchState::Terminal(Outcome::HumanWin));
    assert_eq!(game.outcome(), Some(Outcome::HumanWin));
}

#[test]
fn test_computer_win_reports_line() {
    let mut game = human_first(Difficulty::Optimal);
    let mut rng = StdRng::seed_from_u64(1);
    game.submit_human_move(0).unwrap();
    game.apply_computer_move(Position::Center).unwrap();
    game.submit_human_move(1).unwrap();
    game.apply_computer_move(Position::TopRight).unwrap();
    game.submit_human_move(5).unwrap();

    // O holds 2 and 4; the engine completes the anti-diagonal on 6.
    let report = game.request_computer_move(&mut rng).unwrap().unwrap();
    assert_eq!(*report.placed.position(), Position::BottomLeft);
    let finish = report.finish.unwrap();
    assert_eq!(finish.outcome, Outcome::ComputerWin);
    assert_eq!(finish.line, Some(LINES[7]));
}

#[test]
fn test_draw_has_no_line() {
    // Ends on X,O,X / X,O,O / O,X,X with the human placing last.
    let mut game = human_first(Difficulty::Optimal);
    let script = [
        (Side::Human, 0),
        (Side::Computer, 1),
        (Side::Human, 2),
        (Side::Computer, 4),
        (Side::Human, 3),
        (Side::Computer, 5),
        (Side::Human, 7),
        (Side::Computer, 6),
        (Side::Human, 8),
    ];

    let mut last = None;
    for (side, index) in script {
        last = Some(match side {
            Side::Human => game.submit_human_move(index).unwrap(),
            Side::Computer => game
                .apply_computer_move(Position::from_index(index).unwrap())
                .unwrap(),
        });
    }

    let finish = last.unwrap().finish.unwrap();
    assert_eq!(finish.outcome, Outcome::Draw);
    assert_eq!(finish.line, None);
    assert_eq!(game.board().display(), "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
}

#[test]
fn test_terminal_match_rejects_moves_without_mutation() {
    let mut game = human_first(Difficulty::Optimal);
    let mut rng = StdRng::seed_from_u64(3);
    game.submit_human_move(0).unwrap();
    game.apply_computer_move(Position::MiddleLeft).unwrap();
    game.submit_human_move(1).unwrap();
    game.apply_computer_move(Position::Center).unwrap();
    game.submit_human_move(2).unwrap();

    let frozen = game.board().clone();
    assert_eq!(game.submit_human_move(8), Err(MoveError::GameOver));
    assert_eq!(game.request_computer_move(&mut rng), Err(MoveError::GameOver));
    assert_eq!(
        game.apply_computer_move(Position::BottomRight),
        Err(MoveError::GameOver)
    );
    assert_eq!(*game.board(), frozen);
}

#[test]
fn test_illegal_squares_leave_turn_unchanged() {
    let mut game = human_first(Difficulty::Weak);
    game.submit_human_move(4).unwrap();
    game.apply_computer_move(Position::TopLeft).unwrap();

    let before = game.board().clone();
    assert_eq!(
        game.submit_human_move(0),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(game.submit_human_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(*game.board(), before);
    assert_eq!(*game.state(), MatchState::AwaitingHumanMove);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_computer_cannot_move_on_human_turn() {
    let mut game = human_first(Difficulty::Blended);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        game.request_computer_move(&mut rng),
        Err(MoveError::NotYourTurn(Side::Computer))
    );
}

#[test]
fn test_reset_restarts_with_starting_side() {
    let mut game = MatchController::new(MatchConfig::new(Mark::O, Side::Computer, Difficulty::Optimal));
    let mut rng = StdRng::seed_from_u64(3);
    game.request_computer_move(&mut rng).unwrap();
    game.submit_human_move(8).unwrap();

    game.reset_board();
    assert_eq!(*game.board(), Board::new());
    assert!(game.history().is_empty());
    assert_eq!(*game.state(), MatchState::AwaitingComputerMove);
    assert_eq!(*game.finish(), None);
}

#[test]
fn test_configure_match_switches_marks() {
    let mut game = human_first(Difficulty::Optimal);
    game.submit_human_move(4).unwrap();

    game.configure_match(MatchConfig::new(Mark::O, Side::Human, Difficulty::Weak));
    assert_eq!(*game.board(), Board::new());
    let report = game.submit_human_move(4).unwrap();
    assert_eq!(*report.placed.mark(), Mark::O);
    assert_eq!(*game.config().difficulty(), Difficulty::Weak);
}

#[test]
fn test_optimal_match_against_first_free_square_never_loses() {
    for starting in [Side::Human, Side::Computer] {
        let mut game = MatchController::new(MatchConfig::new(Mark::X, starting, Difficulty::Optimal));
        let mut rng = StdRng::seed_from_u64(17);

        while let Some(side) = game.to_move() {
            match side {
                Side::Human => {
                    let index = game.board().empty_indices().next().unwrap();
                    game.submit_human_move(index).unwrap();
                }
                Side::Computer => {
                    game.request_computer_move(&mut rng).unwrap();
                }
            }
        }

        assert_ne!(game.outcome(), Some(Outcome::HumanWin));
    }
}

#[test]
fn test_report_serializes_for_presentation_layer() {
    let mut game = human_first(Difficulty::Optimal);
    let report = game.submit_human_move(4).unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["placed"]["position"], "Center");
    assert_eq!(json["placed"]["side"], "human");
    assert!(json["finish"].is_null());
}
