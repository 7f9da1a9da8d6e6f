//! Cumulative score across games.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Score category of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameResult {
    /// The human won.
    #[display("Player win")]
    PlayerWin,
    /// The computer won.
    #[display("Computer win")]
    ComputerWin,
    /// Nobody won.
    #[display("Tie")]
    Tie,
}

/// Counts of player wins, computer wins and ties.
///
/// Serialized as a flat object `{"player": n, "computer": n, "ties": n}`.
/// Missing fields read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTally {
    #[serde(rename = "player")]
    player_wins: u32,
    #[serde(rename = "computer")]
    computer_wins: u32,
    ties: u32,
}

impl ScoreTally {
    /// Creates a tally from explicit counts.
    pub fn new(player_wins: u32, computer_wins: u32, ties: u32) -> Self {
        Self {
            player_wins,
            computer_wins,
            ties,
        }
    }

    /// Games won by the human.
    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Games won by the computer.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Games that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Games recorded in total.
    pub fn total(&self) -> u32 {
        self.player_wins
            .saturating_add(self.computer_wins)
            .saturating_add(self.ties)
    }

    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: GameResult) {
        let counter = match result {
            GameResult::PlayerWin => &mut self.player_wins,
            GameResult::ComputerWin => &mut self.computer_wins,
            GameResult::Tie => &mut self.ties,
        };
        *counter = counter.saturating_add(1);
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player: {}  Computer: {}  Ties: {}",
            self.player_wins, self.computer_wins, self.ties
        )
    }
}
