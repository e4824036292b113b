//! Console tic-tac-toe against a random computer opponent.
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] owns the board and drives the screen
//!   state machine (menu, settings, play, pause, game over)
//! - **Console**: the [`InputReader`] and [`Renderer`] seams with
//!   line-based stdin and plain-text stdout implementations
//! - **Core**: board, rules and opponents live in [`tictactoe_core`]
//!
//! # Example
//!
//! ```no_run
//! use console_tictactoe::{DEFAULT_DIMENSION, GameSession, LineInput, TextRenderer};
//! use tictactoe_core::RandomOpponent;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = GameSession::new(
//!     DEFAULT_DIMENSION,
//!     LineInput::stdin(),
//!     TextRenderer::stdout(),
//!     RandomOpponent::from_entropy(),
//! )?;
//! while session.is_running() {
//!     session.update()?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod error;
mod menu;
mod outcome;
mod session;

// Crate-level exports - Console I/O
pub use console::{InputReader, LineInput, Renderer, Reply, TextRenderer, View, parse_choice};

// Crate-level exports - Errors
pub use error::SessionError;

// Crate-level exports - Menus
pub use menu::{GameOverChoice, MainMenuChoice, MenuChoice, PauseChoice};

// Crate-level exports - Results
pub use outcome::{Outcome, Tally};

// Crate-level exports - Session state machine
pub use session::{DEFAULT_DIMENSION, GameSession, ScreenState, Turn};
