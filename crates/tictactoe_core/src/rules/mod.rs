//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They never mutate
//! and run in time proportional to the number of cells.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_stalemate};
pub use win::{detected_line, line_owner};
