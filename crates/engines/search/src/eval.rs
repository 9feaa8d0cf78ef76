//! Isolation heuristics for the search agent.
//!
//! All scores are from `player`'s point of view. Apart from
//! [`custom_score`], each returns `+inf` once `player` has won and `-inf`
//! once it has lost.

use isolation_core::eval::{decided, improved_score, null_score, open_move_score};
use isolation_core::{mobility, Board, Evaluator, Player, Square};
use serde::{Deserialize, Serialize};

/// Names every heuristic an agent can be configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    Null,
    OpenMove,
    Improved,
    #[default]
    Custom,
    WeightedImproved,
    DifferenceBiased,
    FutureMoves,
    Mixed,
}

impl Evaluator<Board> for Heuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        match self {
            Heuristic::Null => null_score(board, player),
            Heuristic::OpenMove => open_move_score(board, player),
            Heuristic::Improved => improved_score(board, player),
            Heuristic::Custom => custom_score(board, player),
            Heuristic::WeightedImproved => weighted_improved_score(board, player),
            Heuristic::DifferenceBiased => difference_player_biased(board, player),
            Heuristic::FutureMoves => future_moves_weight(board, player),
            Heuristic::Mixed => mixed_heuristic(board, player),
        }
    }
}

/// Mobility of the side to move. Never infinite, even for decided boards.
pub fn custom_score(board: &Board, _player: Player) -> f64 {
    mobility(board, board.active_player()) as f64
}

/// Improved score weighted towards the player's own mobility.
pub fn weighted_improved_score(board: &Board, player: Player) -> f64 {
    decided(board, player).unwrap_or_else(|| {
        let own = mobility(board, player) as f64;
        let opp = mobility(board, player.opponent()) as f64;
        10.0 * own - 5.0 * opp
    })
}

/// Own moves minus twice the opponent's: chases the opponent.
pub fn difference_player_biased(board: &Board, player: Player) -> f64 {
    decided(board, player).unwrap_or_else(|| {
        let own = mobility(board, player) as f64;
        let opp = mobility(board, player.opponent()) as f64;
        own - 2.0 * opp
    })
}

/// Offset from the player's square, with the offsets worth checking once it is open.
struct Reach {
    offset: (i8, i8),
    next: &'static [Reach],
}

const fn leaf(dr: i8, dc: i8) -> Reach {
    Reach {
        offset: (dr, dc),
        next: &[],
    }
}

const fn node(dr: i8, dc: i8, next: &'static [Reach]) -> Reach {
    Reach {
        offset: (dr, dc),
        next,
    }
}

/// Score added for an open cell at each level of the reach tree.
const LEVEL_WEIGHTS: [f64; 4] = [1.0, 4.0, 8.0, 16.0];

const UP_ONE: &[Reach] = &[leaf(-2, -2), leaf(-2, 2)];
const DOWN_ONE: &[Reach] = &[leaf(2, -2), leaf(2, 2)];
const LEFT_ONE: &[Reach] = &[leaf(-2, -2), leaf(-2, 2)];
const RIGHT_ONE: &[Reach] = &[leaf(-2, 2), leaf(2, 2)];

const LEFT_TWO: &[Reach] = &[node(-1, 0, UP_ONE), node(1, 0, DOWN_ONE)];
const UP_RIGHT: &[Reach] = &[node(0, -1, LEFT_ONE), node(1, 0, DOWN_ONE)];
const UP_TWO: &[Reach] = &[node(0, -1, LEFT_ONE), node(0, 1, RIGHT_ONE)];
const DOWN_LEFT: &[Reach] = &[node(-1, 0, UP_ONE), node(0, 1, RIGHT_ONE)];
const UP_LEFT: &[Reach] = &[node(0, 1, RIGHT_ONE), node(1, 0, DOWN_ONE)];
const DOWN_TWO: &[Reach] = &[node(0, -1, LEFT_ONE), node(0, 1, RIGHT_ONE)];
const DOWN_RIGHT: &[Reach] = &[node(-1, 0, UP_ONE), node(0, -1, LEFT_ONE)];
const RIGHT_TWO: &[Reach] = &[node(-1, 0, UP_ONE), node(1, 0, DOWN_ONE)];

const FROM_UP_LEFT: &[Reach] = &[node(0, -2, LEFT_TWO), node(-1, 1, UP_RIGHT)];
const FROM_LEFT_UP: &[Reach] = &[node(-2, 0, UP_TWO), node(1, -1, DOWN_LEFT)];
const FROM_LEFT_DOWN: &[Reach] = &[node(-1, -1, UP_LEFT), node(2, 0, DOWN_TWO)];
const FROM_DOWN_LEFT: &[Reach] = &[node(0, -2, LEFT_TWO), node(1, 1, DOWN_RIGHT)];
const FROM_DOWN_RIGHT: &[Reach] = &[node(0, 2, RIGHT_TWO), node(1, -1, UP_LEFT)];
const FROM_RIGHT_DOWN: &[Reach] = &[node(-1, 1, UP_RIGHT), node(2, 0, DOWN_TWO)];
const FROM_RIGHT_UP: &[Reach] = &[node(-2, 0, UP_TWO), node(1, 1, DOWN_RIGHT)];

// Seven of the eight knight jumps; (-2, 1) is not scored.
const REACH_TREE: &[Reach] = &[
    node(-2, -1, FROM_UP_LEFT),
    node(-1, -2, FROM_LEFT_UP),
    node(1, -2, FROM_LEFT_DOWN),
    node(2, -1, FROM_DOWN_LEFT),
    node(2, 1, FROM_DOWN_RIGHT),
    node(1, 2, FROM_RIGHT_DOWN),
    node(-1, 2, FROM_RIGHT_UP),
];

/// Weighted count of the open cells around the player.
///
/// Walks a fixed tree of offsets from the player's square (all offsets are
/// relative to that square, not to the parent). A cell counts only if it is
/// open and its parent counted; deeper levels weigh more. An unplaced
/// player scores 0.
pub fn future_moves_weight(board: &Board, player: Player) -> f64 {
    if let Some(score) = decided(board, player) {
        return score;
    }
    let Some(origin) = board.player_location(player) else {
        return 0.0;
    };

    fn walk(board: &Board, origin: Square, tree: &[Reach], level: usize) -> f64 {
        let mut score = 0.0;
        for reach in tree {
            let (dr, dc) = reach.offset;
            if board.is_open(origin.offset(dr, dc)) {
                score += LEVEL_WEIGHTS[level];
                if level + 1 < LEVEL_WEIGHTS.len() {
                    score += walk(board, origin, reach.next, level + 1);
                }
            }
        }
        score
    }

    walk(board, origin, REACH_TREE, 0)
}

/// `future_moves_weight` once fewer than half the cells are blank,
/// `difference_player_biased` before that.
pub fn mixed_heuristic(board: &Board, player: Player) -> f64 {
    if board.cells() as f64 / 2.0 > board.blank_count() as f64 {
        future_moves_weight(board, player)
    } else {
        difference_player_biased(board, player)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
