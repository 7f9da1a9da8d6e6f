//! End-to-end tests driving the engine through its public operations.

use noughts_core::{Board, GameEngine, GameResult, Mark, Outcome, WIN_LINES};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

fn engine() -> GameEngine<StdRng> {
    GameEngine::with_rng(StdRng::seed_from_u64(2024))
}

/// Applies alternating moves by hand, passing the turn after each.
fn drive(engine: &mut GameEngine<StdRng>, moves: &[(usize, Mark)]) {
    for &(index, mark) in moves {
        assert!(engine.apply_move(index, mark), "move {index} by {mark} rejected");
        if !engine.detect_outcome().is_terminal() {
            engine.end_turn();
        }
    }
}

#[test]
fn test_player_completes_top_row() {
    let mut engine = engine();
    drive(
        &mut engine,
        &[
            (0, Mark::Player),
            (3, Mark::Computer),
            (1, Mark::Player),
            (4, Mark::Computer),
        ],
    );
    assert_eq!(engine.board(), &"XX_ OO_ ___".parse::<Board>().unwrap());
    assert_eq!(engine.state().turn(), Mark::Player);

    let outcome = engine.play_player_move(2).expect("legal move");
    assert_eq!(
        outcome,
        Outcome::Win {
            mark: Mark::Player,
            line: WIN_LINES[0],
        }
    );
    assert_eq!(outcome.line().map(|l| l.indices()), Some([0, 1, 2]));
    assert!(!engine.state().is_active());
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut engine = engine();
    // X O X / X O O / O X X
    drive(
        &mut engine,
        &[
            (0, Mark::Player),
            (1, Mark::Computer),
            (2, Mark::Player),
            (4, Mark::Computer),
            (3, Mark::Player),
            (5, Mark::Computer),
            (7, Mark::Player),
            (6, Mark::Computer),
            (8, Mark::Player),
        ],
    );
    assert_eq!(engine.last_outcome(), Outcome::Tie);
    assert!(!engine.state().is_active());
}

#[test]
fn test_reset_then_detect_is_ongoing_on_empty_board() {
    let mut engine = engine();
    engine.play_player_move(0);
    engine.play_computer_move();
    engine.reset();

    assert_eq!(engine.detect_outcome(), Outcome::Ongoing);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.state().turn(), Mark::Player);
    assert!(engine.state().is_active());
}

#[test]
fn test_occupied_cell_is_a_no_op() {
    let mut engine = engine();
    engine.play_player_move(4);
    let (index, _) = engine.play_computer_move().expect("computer moves");
    let before = *engine.board();

    assert_eq!(engine.play_player_move(index), None);
    assert!(!engine.apply_move(4, Mark::Player));
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.state().turn(), Mark::Player);
}

#[test]
fn test_computer_takes_win_over_block() {
    let mut engine = engine();
    drive(
        &mut engine,
        &[
            (0, Mark::Player),
            (3, Mark::Computer),
            (1, Mark::Player),
            (4, Mark::Computer),
            (8, Mark::Player),
        ],
    );
    assert_eq!(engine.state().turn(), Mark::Computer);
    let (index, outcome) = engine.play_computer_move().expect("computer moves");
    assert_eq!(index, 5);
    assert_eq!(outcome.winner(), Some(Mark::Computer));
}

#[test]
fn test_full_games_record_one_result_each() {
    let results = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&results);

    let mut engine = engine();
    engine.on_game_over(move |result| sink.lock().unwrap().push(result));

    for _ in 0..5 {
        engine.reset();
        while engine.state().is_active() {
            let index = engine
                .board()
                .empty_indices()
                .next()
                .expect("active game has an empty cell");
            engine.play_player_move(index).expect("legal player move");
            engine.play_computer_move();
        }
        // Repeated queries after the end do not re-fire.
        engine.detect_outcome();
    }

    // Filling the lowest empty cell loses the same way every time:
    // X 0, O 4, X 1, O 2 (block), X 3, O 6 (anti-diagonal).
    assert_eq!(*results.lock().unwrap(), vec![GameResult::ComputerWin; 5]);
}
