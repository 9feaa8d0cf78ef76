//! Evaluation contract and the sample heuristics.
//!
//! Every heuristic returns `+inf` for a position already won by `player`,
//! `-inf` for one already lost, and a finite score otherwise.

use crate::{board::Board, movegen::mobility, types::Player};

/// Scores a state from the point of view of `player`.
pub trait Evaluator<S: ?Sized> {
    fn evaluate(&self, state: &S, player: Player) -> f64;
}

impl<S: ?Sized, F> Evaluator<S> for F
where
    F: Fn(&S, Player) -> f64,
{
    #[inline]
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        self(state, player)
    }
}

/// `Some(±inf)` when the game is decided for `player`.
pub fn decided(board: &Board, player: Player) -> Option<f64> {
    if board.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if board.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Only distinguishes won and lost positions.
pub fn null_score(board: &Board, player: Player) -> f64 {
    decided(board, player).unwrap_or(0.0)
}

/// Number of moves open to `player`.
pub fn open_move_score(board: &Board, player: Player) -> f64 {
    decided(board, player).unwrap_or_else(|| mobility(board, player) as f64)
}

/// Own moves minus opponent moves.
pub fn improved_score(board: &Board, player: Player) -> f64 {
    decided(board, player).unwrap_or_else(|| {
        let own = mobility(board, player) as f64;
        let opp = mobility(board, player.opponent()) as f64;
        own - opp
    })
}
