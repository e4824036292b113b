//! Pure tic-tac-toe logic for square boards.
//!
//! The crate knows nothing about consoles or screens. It provides:
//!
//! - **Types**: [`Board`], [`Mark`], [`Square`] and [`Position`]
//! - **Rules**: line and stalemate detection in [`rules`]
//! - **Opponents**: the [`Opponent`] seam and a uniform [`RandomOpponent`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use error::{BoardError, PlaceError};
pub use opponent::{Opponent, RandomOpponent};
pub use position::Position;
pub use types::{Board, MIN_DIMENSION, Mark, Square};
