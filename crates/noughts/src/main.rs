//! Noughts - terminal tic-tac-toe against the computer.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, ScoreStore, Settings, init_file_logging, init_stderr_logging};
use noughts_core::ScoreTally;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.resolved_command();

    let settings = Settings::load(&cli.config)?
        .with_overrides(command.delay_override(), command.scores_override());

    match command {
        Command::Play { .. } => {
            init_file_logging(settings.log_file()).with_context(|| {
                format!("Failed to create log file {}", settings.log_file().display())
            })?;
            noughts::tui::run(&settings).await
        }
        Command::Scores { .. } => {
            init_stderr_logging();
            let tally = ScoreStore::new(settings.scores_path().clone()).load();
            println!("{tally}");
            Ok(())
        }
        Command::ResetScores { .. } => {
            init_stderr_logging();
            ScoreStore::new(settings.scores_path().clone()).save(&ScoreTally::default())?;
            info!(path = %settings.scores_path().display(), "Scores reset");
            println!("Scores reset.");
            Ok(())
        }
    }
}
