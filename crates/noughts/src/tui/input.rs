//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps the digit keys 1-9 onto the board, row-major from the top left.
pub fn digit_position(c: char) -> Option<Position> {
    c.to_digit(10)
        .and_then(|digit| (digit as usize).checked_sub(1))
        .and_then(Position::from_index)
}
