//! Board error types.

use crate::Position;
use derive_more::{Display, Error};

/// Failure to create a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Requested side length is below the playable minimum.
    #[display("Board dimension {dimension} is below the minimum of 3")]
    DimensionTooSmall {
        /// The rejected side length.
        dimension: usize,
    },

    /// Cell storage could not be reserved.
    #[display("Could not allocate storage for a {dimension}x{dimension} board")]
    Allocation {
        /// The side length that was requested.
        dimension: usize,
    },
}

/// Rejected attempt to place a mark.
///
/// A rejected placement never mutates the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("Cell at {position} is already occupied")]
    Occupied {
        /// The occupied cell.
        position: Position,
    },

    /// The position lies outside the board.
    #[display("Cell at {position} is outside the board")]
    OutOfBounds {
        /// The offending position.
        position: Position,
    },
}
