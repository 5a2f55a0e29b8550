//! Strictly Timeline - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use strictly_timeline::GameHistory;
use strictly_timeline_cli::{Cli, Command, Flow, HELP, Session, SessionCommand, TimelineConfig, render};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The fallback filter lives in the config, so logging starts after it loads.
    let config = TimelineConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.size, cli.sort);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        path = ?cli.config,
        board_size = config.board_size(),
        sort_order = %config.sort_order(),
        "Configuration loaded"
    );

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, jump, json } => run_replay(&config, moves, jump, json),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &TimelineConfig) -> Result<()> {
    let mut session =
        Session::new(*config.board_size(), *config.sort_order()).context("Invalid board size")?;
    info!(size = config.board_size(), "Starting interactive session");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}\n\n{}", session.render(), HELP)?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        match session.handle(command) {
            Ok(Flow::Continue(text)) => writeln!(stdout, "{text}")?,
            Ok(Flow::Quit) => break,
            Err(e) => {
                warn!(error = %e, "Command failed");
                writeln!(stdout, "{}", e.message)?;
            }
        }
    }

    info!("Session ended");
    Ok(())
}

/// Replay moves and print the resulting view
#[instrument(skip(config))]
fn run_replay(
    config: &TimelineConfig,
    moves: Vec<usize>,
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut history =
        GameHistory::replay(*config.board_size(), moves).context("Invalid board size")?;
    if let Some(step) = jump {
        history.jump_to(step).context("Cannot jump")?;
    }

    if json {
        let view = serde_json::to_string_pretty(&history.current_view())?;
        println!("{view}");
    } else {
        print!("{}", render(&history, *config.sort_order()));
    }
    Ok(())
}
