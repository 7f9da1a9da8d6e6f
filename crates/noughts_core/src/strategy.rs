//! Rule-based move selection for the computer.
//!
//! The computer takes the first rule that applies:
//!
//! 1. **Win-now**: the lowest empty index that completes a computer line.
//! 2. **Block**: the lowest empty index that would complete a player line.
//! 3. **Center**: index 4.
//! 4. **Corner**: a uniformly random empty corner.
//! 5. **Side**: a uniformly random empty side.
//!
//! Lookahead is a single ply. The computer always takes an immediate win
//! and always stops a lone threat, but a player who sets up two threats at
//! once (a fork) can still beat it.

use crate::position::Position;
use crate::rules::detect_outcome;
use crate::types::{Board, Mark};
use derive_more::Display;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule produced a computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Rule {
    /// Completes a computer line.
    #[display("win")]
    WinNow,
    /// Stops a player line.
    #[display("block")]
    Block,
    /// Takes the center.
    #[display("center")]
    Center,
    /// Takes a corner.
    #[display("corner")]
    Corner,
    /// Takes a side.
    #[display("side")]
    Side,
}

/// Cells the computer considers equally good, and the rule that chose them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    rule: Rule,
    cells: Vec<usize>,
}

impl Candidates {
    /// The rule that applied.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Candidate indices, never empty.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Picks one candidate; a single candidate is returned without touching `rng`.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        match self.cells.as_slice() {
            [only] => Some(*only),
            cells => cells.choose(rng).copied(),
        }
    }
}

/// A mark placed on a working board for inspection.
///
/// The cell is emptied again when the probe is dropped, so every exit path
/// leaves the working board as it was.
struct Probe<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, index: usize, mark: Mark) -> Self {
        board.place(index, mark);
        Self { board, index }
    }

    fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}

/// Whether placing `mark` at `index` makes `mark` the winner.
fn wins_with(work: &mut Board, index: usize, mark: Mark) -> bool {
    let probe = Probe::place(work, index, mark);
    detect_outcome(probe.board()).winner() == Some(mark)
}

/// First empty index, in ascending order, where `mark` would win.
fn first_winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    let mut work = *board;
    board
        .empty_indices()
        .find(|&index| wins_with(&mut work, index, mark))
}

fn empty_among(board: &Board, positions: &[Position]) -> Vec<usize> {
    positions
        .iter()
        .map(|pos| pos.to_index())
        .filter(|&index| board.is_empty(index))
        .collect()
}

/// Evaluates the rules in priority order and returns the first that applies.
///
/// Returns `None` only when the board is full.
#[instrument(level = "trace")]
pub fn candidate_moves(board: &Board) -> Option<Candidates> {
    if let Some(index) = first_winning_cell(board, Mark::Computer) {
        return Some(Candidates {
            rule: Rule::WinNow,
            cells: vec![index],
        });
    }

    if let Some(index) = first_winning_cell(board, Mark::Player) {
        return Some(Candidates {
            rule: Rule::Block,
            cells: vec![index],
        });
    }

    let center = Position::Center.to_index();
    if board.is_empty(center) {
        return Some(Candidates {
            rule: Rule::Center,
            cells: vec![center],
        });
    }

    [
        (Rule::Corner, &Position::CORNERS),
        (Rule::Side, &Position::SIDES),
    ]
    .into_iter()
    .map(|(rule, positions)| Candidates {
        rule,
        cells: empty_among(board, positions),
    })
    .find(|candidates| !candidates.cells.is_empty())
}

/// Chooses the computer's move on `board`, breaking corner and side ties with `rng`.
///
/// Returns `None` when no empty cell remains.
pub fn select_computer_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let candidates = candidate_moves(board)?;
    let index = candidates.pick(rng)?;
    debug!(rule = %candidates.rule(), index, "Computer move selected");
    Some(index)
}
