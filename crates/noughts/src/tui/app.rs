//! Application state for the terminal game.

use crossterm::event::KeyCode;
use noughts_core::{
    Board, GameEngine, GameResult, Mark, Outcome, Position, ScoreTally, WinLine,
};
use rand::Rng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tracing::debug;

use super::input;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Game state as the terminal UI sees it.
///
/// Wraps one [`GameEngine`], the running score tally and the cursor. Finished
/// games reach the tally through the engine's game-over event.
pub struct App<R = StdRng> {
    engine: GameEngine<R>,
    results: mpsc::UnboundedReceiver<GameResult>,
    scores: ScoreTally,
    cursor: Position,
    message: String,
}

impl<R: Rng> App<R> {
    /// Creates the app around `engine`, starting from saved `scores`.
    pub fn new(mut engine: GameEngine<R>, scores: ScoreTally) -> Self {
        let (result_tx, results) = mpsc::unbounded_channel();
        engine.on_game_over(move |result| {
            let _ = result_tx.send(result);
        });

        Self {
            engine,
            results,
            scores,
            cursor: Position::Center,
            message: String::new(),
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = input::digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            other => self.cursor = input::move_cursor(self.cursor, other),
        }
        Flow::Continue
    }

    /// Whether the computer is due to move.
    pub fn is_computer_turn(&self) -> bool {
        self.engine.state().is_active() && self.engine.state().turn() == Mark::Computer
    }

    /// Lets the computer move. Returns the cell it took.
    pub fn computer_turn(&mut self) -> Option<usize> {
        let (index, outcome) = self.engine.play_computer_move()?;
        debug!(index, %outcome, "Computer played");
        self.message = describe(outcome).to_string();
        Some(index)
    }

    /// Moves finished games into the tally. Returns whether anything changed.
    pub fn record_results(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.results.try_recv() {
            self.scores.record(result);
            changed = true;
        }
        changed
    }

    /// Starts a fresh game; the tally is kept.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.message.clear();
    }

    /// The board.
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Running score tally.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// End-of-game message, empty while a game is running.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.engine.last_outcome().line()
    }

    /// Turn indicator text.
    pub fn turn_label(&self) -> &'static str {
        if !self.engine.state().is_active() {
            "Game Over"
        } else {
            match self.engine.state().turn() {
                Mark::Player => "Your turn (X)",
                Mark::Computer => "Computer thinking...",
            }
        }
    }

    fn play(&mut self, pos: Position) {
        if let Some(outcome) = self.engine.play_player_move(pos.to_index()) {
            debug!(position = %pos, %outcome, "Player played");
            self.message = describe(outcome).to_string();
        }
    }
}

fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ongoing => "",
        Outcome::Win {
            mark: Mark::Player, ..
        } => "You won! Great job!",
        Outcome::Win {
            mark: Mark::Computer,
            ..
        } => "Computer wins! Try again!",
        Outcome::Tie => "It's a tie! Good game!",
    }
}
