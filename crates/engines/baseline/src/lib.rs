//! Baseline Isolation Agents
//!
//! Two opponents that any real search agent should beat:
//! - [`RandomEngine`] picks uniformly among the legal moves
//! - [`GreedyEngine`] looks one ply ahead and takes the best-scoring move

use isolation_core::eval::improved_score;
use isolation_core::{Agent, Board, Evaluator, Square, TimeLeft};
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// An agent that plays random legal moves.
///
/// With a seed the sequence of choices is reproducible; `new_game` does not
/// reseed, so consecutive games still differ.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    name: String,
    rng: Option<StdRng>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            name: "Random".to_string(),
            rng: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            name: "Random".to_string(),
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomEngine {
    fn get_move(
        &mut self,
        _board: &Board,
        legal_moves: &[Square],
        _time_left: &dyn TimeLeft,
    ) -> Option<Square> {
        let choice = match self.rng.as_mut() {
            Some(rng) => legal_moves.choose(rng),
            None => legal_moves.choose(&mut thread_rng()),
        };
        choice.copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// An agent that scores the board after each of its moves and keeps the
/// best one. Ties go to the earliest move.
pub struct GreedyEngine {
    name: String,
    evaluator: Box<dyn Evaluator<Board>>,
}

impl GreedyEngine {
    /// Greedy on the improved score.
    pub fn new() -> Self {
        Self::with_evaluator("Greedy", improved_score)
    }

    pub fn with_evaluator(
        name: impl Into<String>,
        evaluator: impl Evaluator<Board> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            evaluator: Box::new(evaluator),
        }
    }

    /// Best move and its score, `None` without legal moves.
    pub fn best_move(&self, board: &Board, legal_moves: &[Square]) -> Option<(Square, f64)> {
        let me = board.active_player();
        let mut best: Option<(Square, f64)> = None;

        for &mv in legal_moves {
            let score = self.evaluator.evaluate(&board.forecast(mv), me);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }
        best
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyEngine {
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Square],
        _time_left: &dyn TimeLeft,
    ) -> Option<Square> {
        let (mv, score) = self.best_move(board, legal_moves)?;
        trace!("{}: {} scores {}", self.name, mv, score);
        Some(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
