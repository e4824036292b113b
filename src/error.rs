//! Session error types.

use derive_more::{Display, Error, From};
use tictactoe_core::{BoardError, PlaceError};

/// Unrecoverable failure while running a session.
///
/// Malformed input and end of input are not errors; they are handled
/// inside the session. Anything that reaches this type ends the program
/// with a failure status.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading the console or writing to it failed.
    #[display("Console I/O failed: {_0}")]
    Io(std::io::Error),

    /// The board could not be created.
    #[display("Board initialization failed: {_0}")]
    Board(BoardError),

    /// A move the session had already validated was refused by the board.
    #[display("Move rejected by board: {_0}")]
    Move(PlaceError),
}
