//! Depth-limited minimax and alpha-beta search.
//!
//! Both searches score positions from the point of view of the root
//! player. The time guard is checked on entry to every call, and a
//! cancellation travels back to the driver through `?` without any frame
//! touching its partial best.

use isolation_core::{Evaluator, GameState, Player, SearchResult};
use serde::{Deserialize, Serialize};

use crate::error::SearchCancelled;
use crate::guard::TimeGuard;

/// What a node with no legal moves is worth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMovesPolicy {
    /// Score 0 regardless of who is stuck.
    #[default]
    Neutral,
    /// The player to move has lost: `-inf` for the root player, `+inf` for the opponent.
    Loss,
}

/// Recursive searcher bound to one root player and one turn clock.
pub struct Searcher<'a, S> {
    evaluator: &'a dyn Evaluator<S>,
    guard: TimeGuard<'a>,
    player: Player,
    no_moves: NoMovesPolicy,
    nodes: u64,
}

impl<'a, S: GameState> Searcher<'a, S> {
    /// Searcher maximizing for `player`, the player to move at the root.
    pub fn new(evaluator: &'a dyn Evaluator<S>, guard: TimeGuard<'a>, player: Player) -> Self {
        Self {
            evaluator,
            guard,
            player,
            no_moves: NoMovesPolicy::Neutral,
            nodes: 0,
        }
    }

    pub fn with_no_moves_policy(mut self, policy: NoMovesPolicy) -> Self {
        self.no_moves = policy;
        self
    }

    /// Nodes entered since construction, including cancelled iterations.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Plain minimax to `depth` plies.
    ///
    /// Children are visited in `legal_moves` order and the first child to
    /// reach the optimum keeps it.
    pub fn minimax(
        &mut self,
        state: &S,
        depth: u32,
        maximizing: bool,
    ) -> Result<SearchResult, SearchCancelled> {
        self.enter()?;

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(self.no_moves_result(state));
        }
        if depth == 0 {
            return Ok(self.leaf(state));
        }

        let mut best = SearchResult::none(if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
        for mv in moves {
            let child = self.minimax(&state.apply(mv), depth - 1, !maximizing)?;
            let improves = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if improves || best.best_move.is_none() {
                best = SearchResult::new(child.score, Some(mv));
            }
        }
        Ok(best)
    }

    /// Minimax with alpha-beta pruning to `depth` plies.
    ///
    /// Returns the same score as [`Searcher::minimax`] for the same
    /// evaluator and move order. Call with `(-inf, +inf)` at the root.
    pub fn alphabeta(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        beta: f64,
        maximizing: bool,
    ) -> Result<SearchResult, SearchCancelled> {
        self.enter()?;

        if maximizing {
            self.max_value(state, depth, alpha, beta)
        } else {
            self.min_value(state, depth, alpha, beta)
        }
    }

    fn max_value(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> Result<SearchResult, SearchCancelled> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(self.no_moves_result(state));
        }
        if depth == 0 {
            return Ok(self.leaf(state));
        }

        let mut best = SearchResult::none(f64::NEG_INFINITY);
        for mv in moves {
            let score = self
                .alphabeta(&state.apply(mv), depth - 1, alpha, beta, false)?
                .score;
            if score > best.score || best.best_move.is_none() {
                best = SearchResult::new(score, Some(mv));
            }
            if best.score >= beta {
                return Ok(best);
            }
            alpha = alpha.max(best.score);
        }
        Ok(best)
    }

    fn min_value(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        mut beta: f64,
    ) -> Result<SearchResult, SearchCancelled> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(self.no_moves_result(state));
        }
        if depth == 0 {
            return Ok(self.leaf(state));
        }

        let mut best = SearchResult::none(f64::INFINITY);
        for mv in moves {
            let score = self
                .alphabeta(&state.apply(mv), depth - 1, alpha, beta, true)?
                .score;
            if score < best.score || best.best_move.is_none() {
                best = SearchResult::new(score, Some(mv));
            }
            if best.score <= alpha {
                return Ok(best);
            }
            beta = beta.min(best.score);
        }
        Ok(best)
    }

    #[inline]
    fn enter(&mut self) -> Result<(), SearchCancelled> {
        self.guard.check()?;
        self.nodes += 1;
        Ok(())
    }

    /// Leaf score paired with the root player's current location.
    ///
    /// The location is not a move; ancestors only read the score.
    fn leaf(&self, state: &S) -> SearchResult {
        SearchResult::new(
            self.evaluator.evaluate(state, self.player),
            state.player_location(self.player),
        )
    }

    fn no_moves_result(&self, state: &S) -> SearchResult {
        let score = match self.no_moves {
            NoMovesPolicy::Neutral => 0.0,
            NoMovesPolicy::Loss if state.active_player() == self.player => f64::NEG_INFINITY,
            NoMovesPolicy::Loss => f64::INFINITY,
        };
        SearchResult::none(score)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
