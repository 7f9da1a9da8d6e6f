//! Exhaustive checks over every game reachable from the empty board.

use noughts_core::{
    Board, Cell, Mark, Outcome, WIN_LINES, candidate_moves, detect_outcome, find_winner,
};

fn with(board: &Board, index: usize, mark: Mark) -> Board {
    let mut cells = *board.cells();
    cells[index] = Cell::Occupied(mark);
    Board::from_cells(cells)
}

/// Distinct marks that hold at least one complete line.
fn winners(board: &Board) -> Vec<Mark> {
    let mut marks = Vec::new();
    for line in WIN_LINES {
        let [a, b, c] = line.indices();
        if let Cell::Occupied(mark) = board.cells()[a] {
            if board.cells()[b] == board.cells()[a]
                && board.cells()[c] == board.cells()[a]
                && !marks.contains(&mark)
            {
                marks.push(mark);
            }
        }
    }
    marks
}

/// Empty cells where `mark` would complete a line.
fn threats(board: &Board, mark: Mark) -> Vec<usize> {
    board
        .empty_indices()
        .filter(|&index| find_winner(&with(board, index, mark)).is_some_and(|(m, _)| m == mark))
        .collect()
}

/// Visits every board reachable by alternating moves (X first) where both
/// sides play any empty cell.
fn visit_all(board: Board, to_move: Mark, seen: &mut usize, f: &mut impl FnMut(&Board, Mark)) {
    *seen += 1;
    f(&board, to_move);
    if detect_outcome(&board).is_terminal() {
        return;
    }
    for index in board.empty_indices() {
        visit_all(with(&board, index, to_move), to_move.opponent(), seen, f);
    }
}

#[test]
fn test_at_most_one_winner_on_reachable_boards() {
    let mut seen = 0;
    visit_all(Board::new(), Mark::Player, &mut seen, &mut |board, _| {
        let winners = winners(board);
        assert!(winners.len() <= 1, "two winners on {}", board.display());
        assert_eq!(
            find_winner(board).map(|(mark, _)| mark),
            winners.first().copied()
        );
    });
    // 549,946 nodes in the full game tree including the root.
    assert_eq!(seen, 549_946);
}

#[test]
fn test_candidates_are_always_empty_cells() {
    let mut seen = 0;
    visit_all(Board::new(), Mark::Player, &mut seen, &mut |board, to_move| {
        if to_move != Mark::Computer || detect_outcome(board).is_terminal() {
            return;
        }
        let candidates = candidate_moves(board).expect("non-terminal board has a move");
        assert!(!candidates.cells().is_empty());
        for &index in candidates.cells() {
            assert!(board.is_empty(index), "occupied {index} on {}", board.display());
        }
    });
}

#[derive(Debug, Default)]
struct Tally {
    player_wins: usize,
    computer_wins: usize,
    ties: usize,
}

/// Plays every player reply against every move the heuristic might pick.
///
/// Asserts that whenever the player wins, the computer's last turn faced
/// two or more distinct threats: the heuristic never loses to a lone threat.
fn play_out(board: Board, to_move: Mark, tally: &mut Tally) {
    match detect_outcome(&board) {
        Outcome::Win {
            mark: Mark::Player, ..
        } => {
            tally.player_wins += 1;
            return;
        }
        Outcome::Win {
            mark: Mark::Computer,
            ..
        } => {
            tally.computer_wins += 1;
            return;
        }
        Outcome::Tie => {
            tally.ties += 1;
            return;
        }
        Outcome::Ongoing => {}
    }

    match to_move {
        Mark::Player => {
            for index in board.empty_indices() {
                play_out(with(&board, index, Mark::Player), Mark::Computer, tally);
            }
        }
        Mark::Computer => {
            let candidates = candidate_moves(&board).expect("board not full");
            let threats_before = threats(&board, Mark::Player);
            for &index in candidates.cells() {
                let next = with(&board, index, Mark::Computer);
                if detect_outcome(&next).winner() != Some(Mark::Computer) {
                    for reply in threats(&next, Mark::Player) {
                        assert!(
                            threats_before.len() >= 2,
                            "computer lost to a lone threat at {reply} on\n{}",
                            next.display()
                        );
                    }
                }
                play_out(next, Mark::Player, tally);
            }
        }
    }
}

#[test]
fn test_computer_only_loses_to_forks() {
    let mut tally = Tally::default();
    play_out(Board::new(), Mark::Player, &mut tally);

    assert!(tally.computer_wins > 0);
    assert!(tally.ties > 0);
    assert!(tally.player_wins > 0, "opposite-corner forks beat the heuristic");
}

#[test]
fn test_opposite_corner_fork_beats_heuristic() {
    // X 0, O 4 (center), X 8, O 2 (corner), X 6 blocks and forks on 3 and 7.
    let board: Board = "X_O _O_ X_X".parse().unwrap();
    assert_eq!(threats(&board, Mark::Player), vec![3, 7]);

    let candidates = candidate_moves(&board).unwrap();
    assert_eq!(candidates.cells(), &[3]);
    let after = with(&board, 3, Mark::Computer);
    assert_eq!(threats(&after, Mark::Player), vec![7]);
}
