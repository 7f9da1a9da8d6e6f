//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Occupant of a cell, or whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// The human player, shown as X. Always moves first.
    #[display("X")]
    Player,
    /// The computer opponent, shown as O.
    #[display("O")]
    Computer,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// Returns the display symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Writes a mark into a cell. Callers check bounds and emptiness.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Empties a cell.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key so the grid doubles as a keypad hint.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&(index + 1).to_string()),
                    Cell::Occupied(mark) => result.push(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Input did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// A character other than X, O, `_`, `.` or `-`.
    #[display("Invalid cell character '{}'", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells written row-major, e.g. `"XX_OO____"`.
    ///
    /// `X` is the player, `O` the computer, and `_`, `.` or `-` an empty cell.
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match c {
                'X' | 'x' => Cell::Occupied(Mark::Player),
                'O' | 'o' => Cell::Occupied(Mark::Computer),
                '_' | '.' | '-' => Cell::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            cells.push(cell);
        }
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { cells })
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
    active: bool,
}

impl GameState {
    /// Creates a fresh game: empty board, player to move, active.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Player,
            active: true,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Whether moves are still accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_turn(&mut self, turn: Mark) {
        self.turn = turn;
    }

    pub(crate) fn finish(&mut self) {
        self.active = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_ OO_ ___".parse().unwrap();
        assert_eq!(board.get(0), Some(Cell::Occupied(Mark::Player)));
        assert_eq!(board.get(3), Some(Cell::Occupied(Mark::Computer)));
        assert!(board.is_empty(2));
        assert_eq!(board.empty_indices().collect::<Vec<_>>(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XXZ______".parse::<Board>(),
            Err(BoardParseError::InvalidCell('Z'))
        );
    }

    #[test]
    fn test_empty_indices_ascending() {
        let board: Board = "X_O_X_O_X".parse().unwrap();
        assert_eq!(board.empty_indices().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        assert!(!Board::new().is_empty(9));
        assert_eq!(Board::new().get(9), None);
    }

    #[test]
    fn test_display_shows_keys_for_empty_cells() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::Player.to_string(), "X");
        assert_eq!(Mark::Computer.to_string(), "O");
        assert_eq!(Mark::Player.opponent(), Mark::Computer);
    }
}
