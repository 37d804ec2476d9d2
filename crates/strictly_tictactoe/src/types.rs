//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A mark placed on the board.
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
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Builds a board from explicit squares.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns the square at a position.
    pub fn at(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks whether a square holds a mark.
    ///
    /// Indices outside 0-8 are never occupied; `place` rejects them.
    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Occupied(_)))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Places a mark at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index past 8 and
    /// [`MoveError::SquareOccupied`] when the square already holds a mark.
    /// The board is left untouched on failure.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if self.is_occupied(index) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[index] = Square::Occupied(mark);
        Ok(())
    }

    /// Unchecked placement for the search; `index` must be empty and in range.
    pub(crate) fn set_mark(&mut self, index: usize, mark: Mark) {
        self.squares[index] = Square::Occupied(mark);
    }

    /// Empties a square. Used by the search to undo hypothetical placements.
    pub(crate) fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }

    /// Empties every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of the empty squares in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so they double as move hints.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_marks_square() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert!(board.is_occupied(4));
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        let before = board.clone();

        let result = board.place(0, Mark::O);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(MoveError::OutOfBounds(9)));
        assert_eq!(board, Board::new());
        assert!(!board.is_occupied(42));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(8, Mark::O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_indices().count(), 9);
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mark_parses_case_insensitively() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
