//! Search Agent
//!
//! Time-bounded adversarial search for Isolation.
//! Depth-limited minimax or alpha-beta, run once at a fixed depth or
//! repeatedly under iterative deepening until the turn clock nearly runs out.

mod config;
mod deepening;
mod error;
mod eval;
mod guard;
mod search;

#[cfg(test)]
mod test_support;

use isolation_core::{Agent, Board, Evaluator, GameState, Square, TimeLeft};
use log::trace;

pub use config::AgentConfig;
pub use deepening::{
    fixed_depth, iterative_deepening, search_root, DeepeningOutcome, SearchMethod, SENTINEL,
};
pub use error::{ConfigError, SearchCancelled};
pub use eval::{
    custom_score, difference_player_biased, future_moves_weight, mixed_heuristic,
    weighted_improved_score, Heuristic,
};
pub use guard::TimeGuard;
pub use search::{NoMovesPolicy, Searcher};

/// Move selector: wires the time guard, the configured search and the
/// driver together for each turn.
///
/// The agent keeps no state between turns apart from statistics of the
/// last search.
pub struct SearchAgent<S = Board> {
    name: String,
    config: AgentConfig,
    evaluator: Box<dyn Evaluator<S>>,
    last_outcome: Option<DeepeningOutcome>,
}

impl SearchAgent<Board> {
    /// Agent scoring leaves with the heuristic named in `config`.
    pub fn new(name: impl Into<String>, config: AgentConfig) -> Self {
        let heuristic = config.heuristic;
        Self::with_evaluator(name, config, heuristic)
    }
}

impl<S: GameState> SearchAgent<S> {
    /// Agent scoring leaves with a custom evaluator; `config.heuristic` is ignored.
    pub fn with_evaluator(
        name: impl Into<String>,
        config: AgentConfig,
        evaluator: impl Evaluator<S> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            config,
            evaluator: Box::new(evaluator),
            last_outcome: None,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    pub fn last_outcome(&self) -> Option<&DeepeningOutcome> {
        self.last_outcome.as_ref()
    }

    /// Runs the configured search on `state` and returns its outcome.
    ///
    /// The player to move in `state` is the maximizing player.
    pub fn search(
        &mut self,
        state: &S,
        legal_moves: &[Square],
        time_left: &dyn TimeLeft,
    ) -> DeepeningOutcome {
        let guard = TimeGuard::new(time_left, self.config.timeout_ms);
        let mut searcher = Searcher::new(&*self.evaluator, guard, state.active_player())
            .with_no_moves_policy(self.config.no_moves);

        let outcome = if self.config.iterative {
            iterative_deepening(&mut searcher, state, self.config.method)
        } else if legal_moves.is_empty() {
            DeepeningOutcome::no_moves()
        } else {
            fixed_depth(
                &mut searcher,
                state,
                self.config.search_depth,
                self.config.method,
            )
        };

        trace!(
            "{}: {} legal moves, depth {} completed, {} nodes, move {:?}",
            self.name,
            legal_moves.len(),
            outcome.completed_depth,
            outcome.nodes,
            outcome.result.best_move
        );
        self.last_outcome = Some(outcome);
        outcome
    }

    /// The move to play, or `None` when no iteration produced one.
    ///
    /// `None` is a pass and the caller's rules decide what it costs.
    pub fn choose_move(
        &mut self,
        state: &S,
        legal_moves: &[Square],
        time_left: &dyn TimeLeft,
    ) -> Option<Square> {
        self.search(state, legal_moves, time_left).result.best_move
    }
}

impl Agent for SearchAgent<Board> {
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Square],
        time_left: &dyn TimeLeft,
    ) -> Option<Square> {
        self.choose_move(board, legal_moves, time_left)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.last_outcome = None;
    }
}
