//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_timeline::SortOrder;

/// Strictly Timeline - tic-tac-toe you can rewind
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board size (overrides config)
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Move list order: ascending or descending (overrides config)
    #[arg(long, global = true)]
    pub sort: Option<SortOrder>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Comma-separated cell indices, e.g. 0,4,1
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to view after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
