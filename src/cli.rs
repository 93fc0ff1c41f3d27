//! Command-line interface for tictactoe_replay.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a clickable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Play tic-tac-toe in the terminal and jump back through the moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show the newest move first
    #[arg(long)]
    pub descending: bool,
}
