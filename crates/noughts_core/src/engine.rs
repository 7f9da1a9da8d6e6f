//! Game engine for human-versus-computer tic-tac-toe.

use crate::rules::{self, Outcome};
use crate::score::GameResult;
use crate::strategy;
use crate::types::{Board, CELL_COUNT, GameState, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Callback fired once per finished game.
pub type GameOverListener = Box<dyn FnMut(GameResult) + Send>;

/// Owns one game at a time and the computer's random source.
///
/// Moves are only ever written through [`GameEngine::apply_move`]. Moves that
/// break the game's rules (occupied cell, finished game, out of turn) are
/// ignored without error. An index past the board is a caller bug and panics.
///
/// `apply_move` does not pass the turn. Either drive the turn yourself with
/// [`GameEngine::end_turn`], or use [`GameEngine::play_player_move`] and
/// [`GameEngine::play_computer_move`], which apply, detect and pass in one go.
pub struct GameEngine<R = StdRng> {
    state: GameState,
    last_outcome: Outcome,
    rng: R,
    listeners: Vec<GameOverListener>,
}

impl GameEngine<StdRng> {
    /// Creates an engine whose tie-breaks come from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine with an explicit random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(),
            last_outcome: Outcome::Ongoing,
            rng,
            listeners: Vec::new(),
        }
    }

    /// Read-only view of the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Shortcut for `state().board()`.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Result of the most recent [`GameEngine::detect_outcome`] call.
    pub fn last_outcome(&self) -> Outcome {
        self.last_outcome
    }

    /// Registers a listener for finished games.
    ///
    /// Each listener sees every game end exactly once. Listeners survive
    /// [`GameEngine::reset`].
    pub fn on_game_over(&mut self, listener: impl FnMut(GameResult) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Places `mark` at `index` if the game is active, the cell is empty and
    /// it is `mark`'s turn. Returns whether the move was applied.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        assert!(
            index < CELL_COUNT,
            "cell index {index} out of range 0..{CELL_COUNT}"
        );

        if !self.state.is_active() || self.state.turn() != mark || !self.board().is_empty(index) {
            return false;
        }

        self.state.board_mut().place(index, mark);
        debug!(index, %mark, "Move applied");
        true
    }

    /// Classifies the board and remembers the result.
    ///
    /// The first time a game is found finished, the engine stops accepting
    /// moves and notifies every listener. Asking again reports the same
    /// outcome without notifying twice.
    #[instrument(skip(self))]
    pub fn detect_outcome(&mut self) -> Outcome {
        let outcome = rules::detect_outcome(self.state.board());
        self.last_outcome = outcome;

        if self.state.is_active() {
            if let Some(result) = outcome.result() {
                self.state.finish();
                info!(%outcome, %result, "Game over");
                for listener in &mut self.listeners {
                    listener(result);
                }
            }
        }

        outcome
    }

    /// Chooses where the computer would play on the current board.
    #[instrument(skip(self))]
    pub fn select_computer_move(&mut self) -> Option<usize> {
        strategy::select_computer_move(self.state.board(), &mut self.rng)
    }

    /// Starts a new game with the player to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.last_outcome = Outcome::Ongoing;
        info!("Game reset");
    }

    /// Hands the move to the other side. Ignored once the game is over.
    #[instrument(skip(self))]
    pub fn end_turn(&mut self) {
        if self.state.is_active() {
            let next = self.state.turn().opponent();
            self.state.set_turn(next);
        }
    }

    /// Plays the human's move at `index`.
    ///
    /// Returns `None` when the move is not allowed. Otherwise returns the
    /// resulting outcome; if the game goes on, it is now the computer's turn.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    #[instrument(skip(self))]
    pub fn play_player_move(&mut self, index: usize) -> Option<Outcome> {
        if !self.apply_move(index, Mark::Player) {
            return None;
        }
        Some(self.finish_move())
    }

    /// Plays the computer's move.
    ///
    /// Returns `None` unless the game is active and it is the computer's
    /// turn. Otherwise returns the chosen index and the resulting outcome.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Option<(usize, Outcome)> {
        if !self.state.is_active() || self.state.turn() != Mark::Computer {
            return None;
        }

        let index = self.select_computer_move()?;
        if !self.apply_move(index, Mark::Computer) {
            return None;
        }
        Some((index, self.finish_move()))
    }

    fn finish_move(&mut self) -> Outcome {
        let outcome = self.detect_outcome();
        if !outcome.is_terminal() {
            self.end_turn();
        }
        outcome
    }
}

impl<R> std::fmt::Debug for GameEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("last_outcome", &self.last_outcome)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
