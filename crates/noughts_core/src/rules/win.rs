//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices whose uniform occupation ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Returns the three indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// All winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Finds the first line held entirely by one mark.
///
/// Lines are scanned in [`WIN_LINES`] order, so when a move completes two
/// lines at once the earlier one is reported.
#[instrument(level = "trace")]
pub fn find_winner(board: &Board) -> Option<(Mark, WinLine)> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.indices();
        match cells[a] {
            Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO_ ___".parse().unwrap();
        assert_eq!(find_winner(&board), Some((Mark::Player, WIN_LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO XO_ O__".parse().unwrap();
        assert_eq!(find_winner(&board), Some((Mark::Computer, WIN_LINES[7])));
        assert_eq!(WIN_LINES[7].indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_ ___ ___".parse().unwrap();
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_row_reported_before_column() {
        // Last move at 0 completes both the top row and the left column.
        let board: Board = "XXX XOO XOO".parse().unwrap();
        assert_eq!(find_winner(&board), Some((Mark::Player, WIN_LINES[0])));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let mut board = Board::new();
            for index in line.indices() {
                board.place(index, Mark::Computer);
            }
            assert_eq!(find_winner(&board), Some((Mark::Computer, line)));
            assert!(line.contains(line.indices()[1]));
        }
    }
}
