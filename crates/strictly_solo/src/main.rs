//! Strictly Solo - command-line entry point.

use anyhow::Result;
use clap::Parser;
use strictly_solo::cli::{Cli, Command};
use strictly_solo::{SoloConfig, run_session, run_simulation};
use strictly_tictactoe::Engine;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            mark,
            first,
            difficulty,
            seed,
            think_ms,
        } => {
            let mut settings = SoloConfig::resolve(config.as_deref())?;
            if let Some(mark) = mark {
                settings = settings.with_human(mark);
            }
            if let Some(first) = first {
                settings = settings.with_starting(first);
            }
            if let Some(difficulty) = difficulty {
                settings = settings.with_difficulty(difficulty);
            }
            if seed.is_some() {
                settings = settings.with_seed(seed);
            }
            if let Some(think_ms) = think_ms {
                settings = settings.with_think_ms(think_ms);
            }
            run_play(settings).await
        }
        Command::Simulate {
            config,
            games,
            difficulty,
            opponent,
            seed,
            json,
        } => {
            let settings = SoloConfig::resolve(config.as_deref())?;
            let difficulty = difficulty.unwrap_or(*settings.difficulty());
            let seed = seed.or(*settings.seed());
            let engine = Engine::new(settings.engine().clone());

            let report = tokio::task::spawn_blocking(move || {
                run_simulation(&engine, difficulty, opponent, games, seed)
            })
            .await??;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(())
        }
    }
}

/// Runs an interactive session on stdin and stdout.
#[instrument(skip_all)]
async fn run_play(settings: SoloConfig) -> Result<()> {
    info!(?settings, "Starting interactive session");
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    run_session(&settings, input, &mut out).await?;
    Ok(())
}
