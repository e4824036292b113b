//! Command-line interface for console_tictactoe.

use clap::Parser;

/// Console tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Play tic-tac-toe against a random opponent in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the opponent's random choices (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tracing filter directive, overriding RUST_LOG (e.g. "console_tictactoe=debug")
    #[arg(long)]
    pub log_filter: Option<String>,
}
