//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Terminal detection and
//! the search both read the same fixed line set.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, has_line, line_winner, winning_line};
