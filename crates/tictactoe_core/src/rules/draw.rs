//! Stalemate detection for tic-tac-toe.

use super::win::detected_line;
use crate::Board;
use tracing::instrument;

/// Checks if every cell holds a mark.
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}

/// A full board on which nobody completed a line.
#[instrument(skip(board))]
pub fn is_stalemate(board: &Board) -> bool {
    is_full(board) && !detected_line(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn fill(board: &mut Board, cells: &[usize], mark: Mark) {
        for &cell in cells {
            let pos = Position::from_index(cell, board.dimension()).unwrap();
            board.place(pos, mark).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
        assert!(!is_stalemate(&board));
    }

    #[test]
    fn test_stalemate_detection() {
        // X O X / X O O / O X X
        let mut board = Board::new(3).unwrap();
        fill(&mut board, &[0, 2, 3, 7, 8], Mark::Player);
        fill(&mut board, &[1, 4, 5, 6], Mark::Ai);

        assert!(is_full(&board));
        assert!(is_stalemate(&board));
    }

    #[test]
    fn test_not_stalemate_if_line() {
        let mut board = Board::new(3).unwrap();
        fill(&mut board, &[0, 1, 2, 4, 7], Mark::Player);
        fill(&mut board, &[3, 5, 6, 8], Mark::Ai);

        assert!(is_full(&board));
        assert!(!is_stalemate(&board));
    }
}
