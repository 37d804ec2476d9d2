//! Draw detection logic for tic-tac-toe.

use super::win::line_winner;
use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && line_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn board_of(marks: &str) -> Board {
        let mut board = Board::new();
        for (i, c) in marks.chars().enumerate() {
            match c {
                'X' => board.place(i, Mark::X).unwrap(),
                'O' => board.place(i, Mark::O).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_of("XOXOXOXO_")));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_of("XOXXOOOXX");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_of("XXXOOXOXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_iff_no_empty_square() {
        // Every board reachable by filling a prefix of the cells.
        for filled in 0..=9 {
            let mut board = Board::new();
            for i in 0..filled {
                let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
                board.place(i, mark).unwrap();
            }
            assert_eq!(is_full(&board), filled == 9);
        }
    }
}
