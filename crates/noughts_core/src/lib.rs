//! Tic-tac-toe against a rule-based computer opponent.
//!
//! This crate holds the game logic only: board state, win and tie
//! detection, the computer's move heuristic, and the score tally. It does
//! no I/O. A presentation layer drives a [`GameEngine`] through its public
//! operations and renders what it reports.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameEngine, GameResult, Mark, Outcome};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut engine = GameEngine::with_rng(StdRng::seed_from_u64(42));
//! engine.on_game_over(|result: GameResult| println!("{result}"));
//!
//! assert_eq!(engine.play_player_move(0), Some(Outcome::Ongoing));
//! let (index, _) = engine.play_computer_move().expect("computer to move");
//! assert_eq!(index, 4);
//! assert_eq!(engine.state().turn(), Mark::Player);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod position;
mod rules;
mod score;
mod strategy;
mod types;

pub use engine::{GameEngine, GameOverListener};
pub use position::Position;
pub use rules::{Outcome, WIN_LINES, WinLine, detect_outcome, find_winner, is_full};
pub use score::{GameResult, ScoreTally};
pub use strategy::{Candidates, Rule, candidate_moves, select_computer_move};
pub use types::{Board, BoardParseError, CELL_COUNT, Cell, GameState, Mark};
