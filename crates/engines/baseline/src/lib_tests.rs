use super::*;
use isolation_core::eval::{null_score, open_move_score};
use isolation_core::{legal_moves, Player};

fn plenty() -> f64 {
    1_000.0
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::standard();
    let moves = legal_moves(&board);

    for _ in 0..20 {
        let mv = engine.get_move(&board, &moves, &plenty).unwrap();
        assert!(moves.contains(&mv));
    }
}

#[test]
fn random_engine_handles_no_moves() {
    let mut engine = RandomEngine::new();
    let mut board = Board::new(1, 1).unwrap();
    board.apply_move(Square::new(0, 0));

    assert_eq!(engine.get_move(&board, &[], &plenty), None);
}

#[test]
fn seeded_random_engine_is_reproducible() {
    let board = Board::standard();
    let moves = legal_moves(&board);

    let mut a = RandomEngine::seeded(7);
    let mut b = RandomEngine::seeded(7);
    let first: Vec<_> = (0..10).map(|_| a.get_move(&board, &moves, &plenty)).collect();
    let second: Vec<_> = (0..10).map(|_| b.get_move(&board, &moves, &plenty)).collect();
    assert_eq!(first, second);
}

#[test]
fn random_engine_name() {
    assert_eq!(RandomEngine::new().name(), "Random");
    assert_eq!(RandomEngine::seeded(1).with_name("R2").name(), "R2");
}

#[test]
fn greedy_engine_takes_the_winning_move() {
    // Player one on (0, 0) of a 3x3 board; two is stuck in the centre and
    // jumping to (1, 2) leaves two with nothing.
    let mut board = Board::new(3, 3).unwrap();
    board.apply_move(Square::new(0, 0));
    board.apply_move(Square::new(1, 1));
    assert_eq!(board.active_player(), Player::One);

    let moves = legal_moves(&board);
    let mut engine = GreedyEngine::new();
    let mv = engine.get_move(&board, &moves, &plenty).unwrap();

    let after = board.forecast(mv);
    assert!(after.is_winner(Player::One));
}

#[test]
fn greedy_engine_prefers_mobility() {
    let mut board = Board::standard();
    board.apply_move(Square::new(3, 3));
    board.apply_move(Square::new(0, 0));

    let moves = legal_moves(&board);
    let engine = GreedyEngine::with_evaluator("Open", open_move_score);
    let (mv, score) = engine.best_move(&board, &moves).unwrap();

    let best = moves
        .iter()
        .map(|&m| open_move_score(&board.forecast(m), Player::One))
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(score, best);
    assert_eq!(open_move_score(&board.forecast(mv), Player::One), best);
}

#[test]
fn greedy_engine_breaks_ties_by_order() {
    let board = Board::standard();
    let moves = legal_moves(&board);
    let mut engine = GreedyEngine::with_evaluator("Null", null_score);

    assert_eq!(engine.get_move(&board, &moves, &plenty), Some(moves[0]));
    assert_eq!(engine.name(), "Null");
    assert_eq!(engine.get_move(&board, &[], &plenty), None);
}
