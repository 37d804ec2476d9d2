//! Interactive session: a human at a terminal against the computer.

use crate::config::SoloConfig;
use crate::players::{ComputerPlayer, HumanPlayer, Player, Turn};
use crate::scoreboard::Scoreboard;
use anyhow::Result;
use std::io::Write;
use strictly_tictactoe::{Engine, Finish, MatchController, MoveReport, Side};
use tokio::io::AsyncBufRead;
use tracing::{info, instrument, warn};

/// Runs matches until the human quits or the input ends.
///
/// Returns the tallies of every match that reached a result.
#[instrument(skip_all, fields(difficulty = %settings.difficulty()))]
pub async fn run_session<R, W>(settings: &SoloConfig, input: R, out: &mut W) -> Result<Scoreboard>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
{
    let engine = Engine::new(settings.engine().clone());
    let mut game = MatchController::with_engine(settings.match_config(), engine.clone());
    let mut human = HumanPlayer::new("You", input);
    let mut computer = ComputerPlayer::new("Computer", engine, *settings.seed(), settings.think());
    let mut scoreboard = Scoreboard::default();

    writeln!(
        out,
        "You play {} against the computer ({}). Enter 1-9 or a square name, 'new' to restart, 'quit' to leave.",
        settings.human(),
        settings.difficulty()
    )?;

    loop {
        let turn = if game.state().is_terminal() {
            writeln!(out, "Type 'new' to play again or 'quit' to leave.")?;
            human.next_turn(&game).await?
        } else if game.to_move() == Some(Side::Computer) {
            writeln!(out, "Computer thinking...")?;
            computer.next_turn(&game).await?
        } else {
            writeln!(out, "\n{}\nYour move:", game.board())?;
            human.next_turn(&game).await?
        };

        match turn {
            Turn::Quit => break,
            Turn::Restart => {
                game.reset_board();
                writeln!(out, "New game.")?;
            }
            Turn::Unrecognized(text) => {
                writeln!(out, "Unrecognized input '{}'.", text)?;
            }
            Turn::Play(pos) => {
                let result = match game.to_move() {
                    Some(Side::Computer) => game.apply_computer_move(pos),
                    _ => game.submit_human_move(pos.to_index()),
                };
                match result {
                    Ok(report) => {
                        announce(out, &report)?;
                        if let Some(finish) = report.finish {
                            scoreboard.record(finish.outcome);
                            finished(out, &game, finish, &scoreboard)?;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        writeln!(out, "{}", e)?;
                    }
                }
            }
        }
    }

    info!(games = scoreboard.total(), "Session over");
    writeln!(out, "Final score: {}", scoreboard)?;
    Ok(scoreboard)
}

fn announce<W: Write>(out: &mut W, report: &MoveReport) -> Result<()> {
    if *report.placed.side() == Side::Computer {
        writeln!(out, "Computer plays {}.", report.placed.position())?;
    }
    Ok(())
}

fn finished<W: Write>(
    out: &mut W,
    game: &MatchController,
    finish: Finish,
    scoreboard: &Scoreboard,
) -> Result<()> {
    writeln!(out, "\n{}", game.board())?;
    let headline = match finish.outcome.winner() {
        Some(Side::Human) => "You win!",
        Some(Side::Computer) => "The computer wins.",
        None => "It's a draw.",
    };
    writeln!(out, "{}", headline)?;
    if let Some(line) = finish.line {
        let cells: Vec<&str> = line.iter().map(|pos| pos.label()).collect();
        writeln!(out, "Winning line: {}", cells.join(", "))?;
    }
    writeln!(out, "Score: {}", scoreboard)?;
    Ok(())
}
