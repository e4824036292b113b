//! Grid coordinates and their linear numbering.

use derive_new::new;
use std::fmt;

/// A cell on the board, addressed by zero-based row and column.
///
/// Positions are independent of any particular board; conversions to and
/// from linear indices take the board's dimension explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Maps a zero-based linear index (row-major) to a position.
    ///
    /// Returns `None` when `index` is not below `dimension²`.
    pub fn from_index(index: usize, dimension: usize) -> Option<Self> {
        if dimension == 0 || index >= dimension.checked_mul(dimension)? {
            return None;
        }
        Some(Self::new(index / dimension, index % dimension))
    }

    /// Maps a one-based cell number, as typed at the console, to a position.
    ///
    /// `0` and numbers beyond `dimension²` yield `None`.
    pub fn from_cell_number(number: u32, dimension: usize) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::from_index(index, dimension)
    }

    /// Row-major linear index, or `None` if the position is off the board.
    pub fn index(self, dimension: usize) -> Option<usize> {
        (self.row < dimension && self.col < dimension).then(|| self.row * dimension + self.col)
    }

    /// One-based cell number as shown to the player.
    pub fn cell_number(self, dimension: usize) -> Option<usize> {
        self.index(dimension).map(|index| index + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_row_major() {
        assert_eq!(Position::from_index(0, 3), Some(Position::new(0, 0)));
        assert_eq!(Position::from_index(4, 3), Some(Position::new(1, 1)));
        assert_eq!(Position::from_index(8, 3), Some(Position::new(2, 2)));
        assert_eq!(Position::from_index(9, 3), None);
        assert_eq!(Position::from_index(7, 4), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_from_cell_number_is_one_based() {
        assert_eq!(Position::from_cell_number(0, 3), None);
        assert_eq!(Position::from_cell_number(1, 3), Some(Position::new(0, 0)));
        assert_eq!(Position::from_cell_number(5, 3), Some(Position::new(1, 1)));
        assert_eq!(Position::from_cell_number(9, 3), Some(Position::new(2, 2)));
        assert_eq!(Position::from_cell_number(10, 3), None);
    }

    #[test]
    fn test_index_rejects_off_board() {
        assert_eq!(Position::new(2, 1).index(3), Some(7));
        assert_eq!(Position::new(3, 0).index(3), None);
        assert_eq!(Position::new(0, 3).index(3), None);
        assert_eq!(Position::new(1, 1).cell_number(3), Some(5));
    }
}
