//! Writing screens to the console.

use crate::menu::{GameOverChoice, MainMenuChoice, MenuChoice, PauseChoice};
use crate::outcome::{Outcome, Tally};
use std::fmt;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use tictactoe_core::Board;
use tracing::instrument;

/// Everything the session can show.
#[derive(Debug, Clone)]
pub enum View<'a> {
    /// Greeting and the main menu.
    MainMenu,
    /// Settings placeholder shown before returning to the menu.
    SettingsNotice,
    /// Announces a fresh game.
    GameStart,
    /// The current board.
    Board(&'a Board),
    /// Asks the player for a cell numbered `1..=cells`, or 0 to pause.
    YourTurn {
        /// Highest cell number.
        cells: u32,
    },
    /// Corrective message for a rejected answer.
    InvalidOption {
        /// Range the prompt accepts.
        range: RangeInclusive<u32>,
    },
    /// The chosen cell already holds a mark.
    OccupiedCell,
    /// The pause menu.
    PauseMenu,
    /// Play continues after a pause.
    Resumed,
    /// Final board, result line, score and follow-up options.
    GameOver {
        /// Board as the game ended.
        board: &'a Board,
        /// How the game ended.
        outcome: Outcome,
        /// Score including this game.
        tally: &'a Tally,
    },
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::MainMenu => {
                writeln!(f, "Welcome to TictacToe!")?;
                write_menu::<MainMenuChoice>(f)
            }
            View::SettingsNotice => {
                writeln!(f, "Settings are not yet implemented. Returning to main menu...")
            }
            View::GameStart => writeln!(f, "Game starts."),
            View::Board(board) => write!(f, "{board}"),
            View::YourTurn { cells } => {
                writeln!(f, "Your turn!")?;
                writeln!(f, "Pick a cell [1-{cells}] or Pause [0].")
            }
            View::InvalidOption { range } => writeln!(
                f,
                "Please, enter a valid option [{}-{}]",
                range.start(),
                range.end()
            ),
            View::OccupiedCell => writeln!(f, "Please, choose an empty cell."),
            View::PauseMenu => {
                writeln!(f, "Game paused.")?;
                write_menu::<PauseChoice>(f)
            }
            View::Resumed => writeln!(f, "Game resumed."),
            View::GameOver {
                board,
                outcome,
                tally,
            } => {
                write!(f, "{board}")?;
                writeln!(f, "{outcome}")?;
                writeln!(f, "{tally}")?;
                write_menu::<GameOverChoice>(f)
            }
        }
    }
}

fn write_menu<M: MenuChoice>(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    M::lines()
        .iter()
        .try_for_each(|line| writeln!(f, "{line}"))
}

/// Sink for screens.
pub trait Renderer {
    /// Shows `view` to the player.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the output cannot be written.
    fn render(&mut self, view: &View<'_>) -> io::Result<()>;
}

/// Writes screens as plain text, flushing after each one.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrows the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<io::Stdout> {
    /// Writes to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    #[instrument(skip_all)]
    fn render(&mut self, view: &View<'_>) -> io::Result<()> {
        write!(self.out, "{view}")?;
        self.out.flush()
    }
}
