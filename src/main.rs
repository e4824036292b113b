//! Console tic-tac-toe.
//!
//! Runs the session state machine on stdin/stdout. Diagnostics go to
//! stderr so the game text stays clean.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console_tictactoe::{DEFAULT_DIMENSION, GameSession, LineInput, TextRenderer};
use tictactoe_core::RandomOpponent;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_filter.as_deref());

    let opponent = match cli.seed {
        Some(seed) => {
            info!(seed, "Using seeded opponent");
            RandomOpponent::seeded(seed)
        }
        None => RandomOpponent::from_entropy(),
    };

    let mut session = GameSession::new(
        DEFAULT_DIMENSION,
        LineInput::stdin(),
        TextRenderer::stdout(),
        opponent,
    )
    .inspect_err(|e| error!(error = %e, "Failed to initialize game session"))?;

    while session.is_running() {
        session
            .update()
            .inspect_err(|e| error!(error = %e, "Game session failed"))?;
    }

    let tally = session.close();
    info!(%tally, "Exiting");
    Ok(())
}

/// Sets up stderr logging from `--log-filter`, then `RUST_LOG`, then `warn`.
#[instrument]
fn initialize_tracing(directive: Option<&str>) {
    let filter = directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
