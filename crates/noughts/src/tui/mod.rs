//! Terminal UI: the presentation layer over the game engine.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::GameEngine;
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::Rng;
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

use crate::settings::Settings;
use crate::store::ScoreStore;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Input poll interval while waiting for the player.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the game until the player quits.
///
/// Scores are loaded from the configured store at startup and saved after
/// every finished game.
#[instrument(skip_all, fields(scores = %settings.scores_path().display()))]
pub async fn run(settings: &Settings) -> Result<()> {
    info!("Starting terminal game");

    let store = ScoreStore::new(settings.scores_path().clone());
    let mut app = App::new(GameEngine::new(), store.load());

    enable_raw_mode()?;
    let mut terminal = build_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            if let Err(e) = restore_terminal() {
                warn!(error = %e, "Failed to restore terminal");
            }
        },
    )?;

    let res = run_loop(&mut terminal, &mut app, &store, settings.computer_delay()).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = %app.scores(), "Terminal game closed");
    res
}

async fn run_loop<R: Rng>(
    terminal: &mut Tui,
    app: &mut App<R>,
    store: &ScoreStore,
    delay: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.is_computer_turn() {
            sleep(delay).await;
            discard_pending_input()?;
            app.computer_turn();
            save_results(app, store);
            continue;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == Flow::Quit {
                info!("Player quit");
                return Ok(());
            }
            save_results(app, store);
        }
    }
}

/// Runs `build`, calling `restore` before returning its error.
fn build_or_restore<T>(
    build: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    build().inspect_err(|_| restore())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Drops keys pressed while the computer was thinking.
fn discard_pending_input() -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}

fn save_results<R: Rng>(app: &mut App<R>, store: &ScoreStore) {
    if app.record_results() {
        if let Err(e) = store.save(app.scores()) {
            warn!(error = %e, "Failed to save scores");
        }
    }
}
