//! Core domain types for tic-tac-toe.

use crate::{BoardError, PlaceError, Position};
use std::fmt;
use tracing::{debug, instrument};

/// Smallest side length a board may have.
pub const MIN_DIMENSION: usize = 3;

/// Mark placed by one of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The human at the console (moves first).
    Player,
    /// The computer opponent.
    Ai,
}

impl Mark {
    /// Character drawn inside an occupied cell.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Ai => 'O',
        }
    }

    /// Returns the other side's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Ai,
            Mark::Ai => Mark::Player,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Nothing placed yet.
    Empty,
    /// Holds a mark for the rest of the game.
    Occupied(Mark),
}

impl Square {
    /// Character drawn for this cell.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}

/// Square `dimension × dimension` grid stored row-major.
///
/// Storage is sized once at construction. [`Board::clear`] resets the
/// cells in place, so a board can be reused across games without
/// reallocating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DimensionTooSmall`] below [`MIN_DIMENSION`] and
    /// [`BoardError::Allocation`] when cell storage cannot be reserved.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        if dimension < MIN_DIMENSION {
            return Err(BoardError::DimensionTooSmall { dimension });
        }

        let cells = dimension
            .checked_mul(dimension)
            .ok_or(BoardError::Allocation { dimension })?;
        let mut squares = Vec::new();
        squares
            .try_reserve_exact(cells)
            .map_err(|_| BoardError::Allocation { dimension })?;
        squares.resize(cells, Square::Empty);

        debug!(dimension, cells, "Allocated board");
        Ok(Self { dimension, squares })
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells (`dimension²`).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at `pos`, or `None` if it is off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        pos.index(self.dimension)
            .and_then(|index| self.squares.get(index).copied())
    }

    /// Checks if the square at `pos` is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Fails without touching the board if the cell is occupied or off
    /// the board.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), PlaceError> {
        let square = pos
            .index(self.dimension)
            .and_then(|index| self.squares.get_mut(index))
            .ok_or(PlaceError::OutOfBounds { position: pos })?;

        match *square {
            Square::Empty => {
                *square = Square::Occupied(mark);
                Ok(())
            }
            Square::Occupied(_) => Err(PlaceError::Occupied { position: pos }),
        }
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .filter_map(|(index, _)| Position::from_index(index, self.dimension))
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Empties every cell, keeping the allocation.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }
}

impl fmt::Display for Board {
    /// Draws the framed grid, one `+-` segment per column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "+-".repeat(self.dimension);
        for row in self.squares.chunks(self.dimension) {
            writeln!(f, "{border}+")?;
            for square in row {
                write!(f, "|{}", square.symbol())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        for dimension in 3..=6 {
            let board = Board::new(dimension).unwrap();
            assert_eq!(board.cell_count(), dimension * dimension);
            assert_eq!(board.empty_count(), dimension * dimension);
        }
    }

    #[test]
    fn test_dimension_below_minimum_rejected() {
        assert_eq!(
            Board::new(2),
            Err(BoardError::DimensionTooSmall { dimension: 2 })
        );
        assert!(Board::new(0).is_err());
    }

    #[test]
    fn test_place_occupies_exactly_one_cell() {
        let mut board = Board::new(3).unwrap();
        let center = Position::new(1, 1);
        board.place(center, Mark::Player).unwrap();

        assert_eq!(board.get(center), Some(Square::Occupied(Mark::Player)));
        assert_eq!(board.empty_count(), 8);
        assert!(!board.empty_cells().any(|p| p == center));
    }

    #[test]
    fn test_place_on_occupied_leaves_board_unchanged() {
        let mut board = Board::new(3).unwrap();
        let corner = Position::new(0, 0);
        board.place(corner, Mark::Player).unwrap();
        let before = board.clone();

        let result = board.place(corner, Mark::Ai);
        assert_eq!(result, Err(PlaceError::Occupied { position: corner }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_off_board_rejected() {
        let mut board = Board::new(3).unwrap();
        let result = board.place(Position::new(3, 0), Mark::Ai);
        assert!(matches!(result, Err(PlaceError::OutOfBounds { .. })));
        assert_eq!(board.empty_count(), 9);
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut board = Board::new(4).unwrap();
        board.place(Position::new(3, 3), Mark::Ai).unwrap();
        board.clear();
        assert_eq!(board.empty_count(), 16);
        assert_eq!(board.dimension(), 4);
    }

    #[test]
    fn test_display_empty_board() {
        let board = Board::new(3).unwrap();
        let expected = "\
+-+-+-+
| | | |
+-+-+-+
| | | |
+-+-+-+
| | | |
+-+-+-+
";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_display_shows_marks() {
        let mut board = Board::new(3).unwrap();
        board.place(Position::new(0, 0), Mark::Player).unwrap();
        board.place(Position::new(2, 1), Mark::Ai).unwrap();
        let drawn = board.to_string();
        let lines: Vec<_> = drawn.lines().collect();
        assert_eq!(lines[1], "|X| | |");
        assert_eq!(lines[5], "| |O| |");
    }
}
