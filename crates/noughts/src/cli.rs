//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a rule-based computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Missing file means defaults.
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run, `play` when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            delay_ms: None,
            scores: None,
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Score file to use instead of the configured one
        #[arg(long)]
        scores: Option<PathBuf>,
    },

    /// Print the saved score tally
    Scores {
        /// Score file to use instead of the configured one
        #[arg(long)]
        scores: Option<PathBuf>,
    },

    /// Set the saved score tally back to zero
    ResetScores {
        /// Score file to use instead of the configured one
        #[arg(long)]
        scores: Option<PathBuf>,
    },
}

impl Command {
    /// Delay override carried by this command, if any.
    pub fn delay_override(&self) -> Option<u64> {
        match self {
            Command::Play { delay_ms, .. } => *delay_ms,
            Command::Scores { .. } | Command::ResetScores { .. } => None,
        }
    }

    /// Score file override carried by this command, if any.
    pub fn scores_override(&self) -> Option<PathBuf> {
        match self {
            Command::Play { scores, .. }
            | Command::Scores { scores }
            | Command::ResetScores { scores } => scores.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(
            cli.resolved_command(),
            Command::Play {
                delay_ms: None,
                scores: None
            }
        );
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_play_flags() {
        let cli =
            Cli::try_parse_from(["noughts", "play", "--delay-ms", "0", "--scores", "x.json"])
                .unwrap();
        let command = cli.resolved_command();
        assert_eq!(command.delay_override(), Some(0));
        assert_eq!(command.scores_override(), Some(PathBuf::from("x.json")));
    }

    #[test]
    fn test_reset_scores_with_global_config() {
        let cli = Cli::try_parse_from(["noughts", "reset-scores", "--config", "c.toml"]).unwrap();
        assert!(matches!(cli.resolved_command(), Command::ResetScores { .. }));
        assert_eq!(cli.config, PathBuf::from("c.toml"));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["noughts", "serve"]).is_err());
    }
}
