//! Human player reading moves from a line-oriented input.

use super::{Player, Turn};
use anyhow::Result;
use strictly_tictactoe::{MatchController, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, instrument};

/// Human player fed by lines of text, usually stdin.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn next_turn(&mut self, _game: &MatchController) -> Result<Turn> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                debug!("Input closed");
                return Ok(Turn::Quit);
            };
            if line.trim().is_empty() {
                continue;
            }
            return Ok(parse_turn(&line));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Interprets one line of input.
///
/// Squares are numbered 1-9 as on the rendered board; labels such as
/// `center` or `top-left` also work.
pub fn parse_turn(line: &str) -> Turn {
    let text = line.trim();
    match text.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Turn::Quit,
        "n" | "new" | "restart" => return Turn::Restart,
        _ => {}
    }

    if let Ok(number) = text.parse::<usize>() {
        return match number.checked_sub(1).and_then(Position::from_index) {
            Some(pos) => Turn::Play(pos),
            None => Turn::Unrecognized(text.to_string()),
        };
    }

    match Position::from_label_or_number(text) {
        Some(pos) => Turn::Play(pos),
        None => Turn::Unrecognized(text.to_string()),
    }
}
