//! Command-line interface for strictly_grid_tui.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Grid - hot-seat tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_grid_tui")]
#[command(about = "Play tic-tac-toe on a checked game state machine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "strictly_grid.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
