//! Line detection for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Returns the mark filling a complete line, if any.
///
/// Lines are checked rows first, then columns, then the main diagonal,
/// then the anti-diagonal. Every line spans the full board dimension.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn line_owner(board: &Board) -> Option<Mark> {
    let n = board.dimension();

    (0..n)
        .find_map(|row| uniform_mark(board, (0..n).map(move |col| Position::new(row, col))))
        .or_else(|| {
            (0..n).find_map(|col| uniform_mark(board, (0..n).map(move |row| Position::new(row, col))))
        })
        .or_else(|| uniform_mark(board, (0..n).map(|i| Position::new(i, i))))
        .or_else(|| uniform_mark(board, (0..n).map(|i| Position::new(i, n - 1 - i))))
}

/// Checks whether any row, column or diagonal is held by a single mark.
pub fn detected_line(board: &Board) -> bool {
    line_owner(board).is_some()
}

/// The mark shared by every cell of `line`, or `None` if any cell is
/// empty or the marks differ.
fn uniform_mark(board: &Board, line: impl Iterator<Item = Position>) -> Option<Mark> {
    let mut squares = line.map(|pos| board.get(pos));
    let Some(Some(Square::Occupied(first))) = squares.next() else {
        return None;
    };
    squares
        .all(|square| square == Some(Square::Occupied(first)))
        .then_some(first)
}
