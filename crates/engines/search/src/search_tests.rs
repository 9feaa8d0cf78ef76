use super::*;
use crate::test_support::*;
use isolation_core::eval::improved_score;
use isolation_core::{Board, Evaluator, Square};
use std::cell::Cell;

const INF: f64 = f64::INFINITY;

fn run_minimax(state: &TreeState, depth: u32) -> SearchResult {
    let calls = Cell::new(0);
    let clock = counting_clock(&calls);
    let mut searcher = tree_searcher(&clock);
    searcher.minimax(state, depth, true).unwrap()
}

fn run_alphabeta(state: &TreeState, depth: u32) -> SearchResult {
    let calls = Cell::new(0);
    let clock = counting_clock(&calls);
    let mut searcher = tree_searcher(&clock);
    searcher.alphabeta(state, depth, -INF, INF, true).unwrap()
}

/// Two moves for the root; the opponent answers each with two leaves.
fn two_ply_tree(a: [f64; 2], b: [f64; 2]) -> TreeState {
    TreeState::new(node(vec![
        (mv(0), node(vec![(mv(10), leaf(a[0])), (mv(11), leaf(a[1]))])),
        (mv(1), node(vec![(mv(12), leaf(b[0])), (mv(13), leaf(b[1]))])),
    ]))
}

#[test]
fn test_no_legal_moves_is_neutral() {
    let state = TreeState::new(stuck());
    for depth in 0..3 {
        assert_eq!(run_minimax(&state, depth), SearchResult::none(0.0));
        assert_eq!(run_alphabeta(&state, depth), SearchResult::none(0.0));
    }
}

#[test]
fn test_leaf_reports_score_and_current_location() {
    let state = TreeState::new(Tree::Node(7.5, vec![(mv(0), leaf(1.0))]));
    let expected = SearchResult::new(7.5, Some(HOME));
    assert_eq!(run_minimax(&state, 0), expected);
    assert_eq!(run_alphabeta(&state, 0), expected);
}

#[test]
fn test_prefers_move_with_better_reply() {
    // A: opponent holds us to 5. B: opponent holds us to 3.
    let state = two_ply_tree([5.0, 7.0], [3.0, 9.0]);
    let expected = SearchResult::new(5.0, Some(mv(0)));
    assert_eq!(run_minimax(&state, 2), expected);
    assert_eq!(run_alphabeta(&state, 2), expected);
}

#[test]
fn test_minimizing_root_picks_lowest() {
    let state = TreeState::new(node(vec![
        (mv(0), leaf(4.0)),
        (mv(1), leaf(-2.0)),
        (mv(2), leaf(1.0)),
    ]));
    let calls = Cell::new(0);
    let clock = counting_clock(&calls);

    let mut searcher = tree_searcher(&clock);
    assert_eq!(
        searcher.minimax(&state, 1, false).unwrap(),
        SearchResult::new(-2.0, Some(mv(1)))
    );
    assert_eq!(
        searcher.alphabeta(&state, 1, -INF, INF, false).unwrap(),
        SearchResult::new(-2.0, Some(mv(1)))
    );
}

#[test]
fn test_ties_keep_first_move_in_order() {
    let state = TreeState::new(node(vec![
        (mv(3), leaf(4.0)),
        (mv(1), leaf(4.0)),
        (mv(2), leaf(1.0)),
    ]));
    for _ in 0..5 {
        assert_eq!(run_minimax(&state, 1).best_move, Some(mv(3)));
        assert_eq!(run_alphabeta(&state, 1).best_move, Some(mv(3)));
    }
}

#[test]
fn test_all_losing_moves_still_return_a_move() {
    let state = TreeState::new(node(vec![(mv(0), leaf(-INF)), (mv(1), leaf(-INF))]));
    let expected = SearchResult::new(-INF, Some(mv(0)));
    assert_eq!(run_minimax(&state, 1), expected);
    assert_eq!(run_alphabeta(&state, 1), expected);
}

#[test]
fn test_alphabeta_prunes_refuted_sibling() {
    // After A is worth 3, B's first reply (2) refutes B; its second reply is skipped.
    let state = two_ply_tree([3.0, 5.0], [2.0, 100.0]);

    let calls = Cell::new(0);
    let clock = counting_clock(&calls);
    let mut minimax = tree_searcher(&clock);
    let full = minimax.minimax(&state, 2, true).unwrap();

    let mut alphabeta = tree_searcher(&clock);
    let pruned = alphabeta.alphabeta(&state, 2, -INF, INF, true).unwrap();

    assert_eq!(full, SearchResult::new(3.0, Some(mv(0))));
    assert_eq!(pruned, full);
    assert_eq!(minimax.nodes(), 7);
    assert_eq!(alphabeta.nodes(), 6);
}

#[test]
fn test_alphabeta_matches_minimax_on_isolation_boards() {
    let mut board = Board::new(5, 5).unwrap();
    board.apply_move(Square::new(2, 2));
    board.apply_move(Square::new(0, 1));

    let calls = Cell::new(0);
    let clock = counting_clock(&calls);
    let evaluator: &dyn Evaluator<Board> = &improved_score;

    for depth in 1..=4 {
        for root in [board.clone(), board.forecast(Square::new(0, 3))] {
            let player = root.active_player();
            let mut minimax =
                Searcher::new(evaluator, TimeGuard::new(&clock, THRESHOLD_MS), player);
            let mut alphabeta =
                Searcher::new(evaluator, TimeGuard::new(&clock, THRESHOLD_MS), player);

            let full = minimax.minimax(&root, depth, true).unwrap();
            let pruned = alphabeta.alphabeta(&root, depth, -INF, INF, true).unwrap();

            assert_eq!(pruned.score, full.score, "depth {depth}");
            assert_eq!(pruned.best_move, full.best_move, "depth {depth}");
            assert!(alphabeta.nodes() <= minimax.nodes());
        }
    }
}

#[test]
fn test_guard_checked_on_every_node() {
    let state = two_ply_tree([1.0, 2.0], [3.0, 4.0]);
    let calls = Cell::new(0);
    let clock = counting_clock(&calls);

    let mut searcher = tree_searcher(&clock);
    searcher.minimax(&state, 2, true).unwrap();
    assert_eq!(calls.get(), 7);
    assert_eq!(searcher.nodes(), 7);
}

#[test]
fn test_cancellation_unwinds_to_caller() {
    let state = two_ply_tree([1.0, 2.0], [3.0, 4.0]);

    for budget in 0..7 {
        let calls = Cell::new(0);
        let clock = expiring_clock(&calls, budget);
        let mut searcher = tree_searcher(&clock);
        let err = searcher.minimax(&state, 2, true).unwrap_err();
        assert_eq!(err.remaining_ms, 0.0);
        assert_eq!(err.threshold_ms, THRESHOLD_MS);
        // Nothing is explored after the guard fires.
        assert_eq!(calls.get(), budget + 1);

        let calls = Cell::new(0);
        let clock = expiring_clock(&calls, budget.min(5));
        let mut searcher = tree_searcher(&clock);
        assert!(searcher.alphabeta(&state, 2, -INF, INF, true).is_err());
    }
}

#[test]
fn test_loss_policy_scores_stuck_player() {
    let calls = Cell::new(0);
    let clock = counting_clock(&calls);

    // Root player is to move and stuck.
    let stuck_root = TreeState::new(stuck());
    let mut searcher = tree_searcher(&clock).with_no_moves_policy(NoMovesPolicy::Loss);
    assert_eq!(searcher.minimax(&stuck_root, 2, true).unwrap(), SearchResult::none(-INF));

    // Opponent is stuck after our only move.
    let state = TreeState::new(node(vec![(mv(0), stuck())]));
    assert_eq!(
        searcher.alphabeta(&state, 2, -INF, INF, true).unwrap(),
        SearchResult::new(INF, Some(mv(0)))
    );
}

#[test]
fn test_single_cell_board_returns_only_move() {
    let board = Board::new(1, 1).unwrap();
    let calls = Cell::new(0);
    let clock = counting_clock(&calls);
    let evaluator: &dyn Evaluator<Board> = &improved_score;

    for depth in 1..4 {
        let mut searcher =
            Searcher::new(evaluator, TimeGuard::new(&clock, THRESHOLD_MS), Player::One);
        let result = searcher.minimax(&board, depth, true).unwrap();
        assert_eq!(result.best_move, Some(Square::new(0, 0)));
        let result = searcher.alphabeta(&board, depth, -INF, INF, true).unwrap();
        assert_eq!(result.best_move, Some(Square::new(0, 0)));
    }
}
