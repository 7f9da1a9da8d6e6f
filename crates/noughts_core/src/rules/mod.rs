//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so the computer heuristic can evaluate hypothetical boards
//! with exactly the checks the engine uses.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, detect_outcome};
pub use win::{WIN_LINES, WinLine, find_winner};
