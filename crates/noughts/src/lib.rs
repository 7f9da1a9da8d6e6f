//! Noughts - terminal tic-tac-toe against a rule-based computer.
//!
//! The game rules and the computer's heuristic live in [`noughts_core`].
//! This crate is the presentation layer around them:
//!
//! - **CLI**: `play`, `scores` and `reset-scores` subcommands
//! - **Settings**: TOML file with the computer delay and file locations
//! - **Store**: the score tally, persisted as JSON
//! - **TUI**: ratatui front end driving one [`noughts_core::GameEngine`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod logging;
mod settings;
mod store;
pub mod tui;

pub use cli::{Cli, Command};
pub use logging::{init_file_logging, init_stderr_logging};
pub use settings::{ConfigError, Settings};
pub use store::{SCORE_STORAGE_KEY, ScoreStore, StoreError};
