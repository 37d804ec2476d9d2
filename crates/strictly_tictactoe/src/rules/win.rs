//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark, Square};

/// Three positions that win when held by one mark.
pub type Line = [Position; 3];

/// The 8 winning lines: rows, then columns, then diagonals.
///
/// Enumeration order is the tie-break when several lines are complete.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// First completed line and the mark holding it.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.at(a) {
            Square::Occupied(mark) if board.at(b) == board.at(a) && board.at(c) == board.at(a) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Returns the mark holding a completed line, if any.
pub fn line_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Checks whether `mark` holds any complete line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let held = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.at(pos) == held))
}
