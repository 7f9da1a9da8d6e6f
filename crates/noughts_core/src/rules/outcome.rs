//! Terminal classification of a board.

use super::{WinLine, find_winner, is_full};
use crate::score::GameResult;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    #[default]
    Ongoing,
    /// `mark` holds every cell of `line`.
    Win {
        /// The winner.
        mark: Mark,
        /// The completed line, for highlighting.
        line: WinLine,
    },
    /// Board full, no winner.
    Tie,
}

impl Outcome {
    /// Whether the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Score category for a terminal outcome.
    pub fn result(&self) -> Option<GameResult> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Win {
                mark: Mark::Player, ..
            } => Some(GameResult::PlayerWin),
            Outcome::Win {
                mark: Mark::Computer,
                ..
            } => Some(GameResult::ComputerWin),
            Outcome::Tie => Some(GameResult::Tie),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win { mark, line } => write!(f, "{} wins on {:?}", mark, line.indices()),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Classifies `board`: a win on the first complete line, otherwise a tie
/// when full, otherwise ongoing.
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some((mark, line)) = find_winner(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}
