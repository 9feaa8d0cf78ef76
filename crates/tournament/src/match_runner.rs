//! Match runner for playing games between agents

use isolation_core::{legal_moves, Agent, Board, MoveTimer, Player, Square, TimeLeft};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::time::Duration;

use crate::results::{GameResult, MatchResult};

/// Why a game ended. The named player always loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The agent answered after its clock ran out
    Timeout,
    /// The agent passed or returned a move that was not legal
    Forfeit,
    /// The player to move was stuck
    NoLegalMoves,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Termination::Timeout => "timeout",
            Termination::Forfeit => "forfeit",
            Termination::NoLegalMoves => "no legal moves",
        };
        f.write_str(text)
    }
}

/// A finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub winner: Player,
    pub termination: Termination,
    /// Moves played after the starting position
    pub moves: Vec<Square>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }

    /// Result for whoever played `player`.
    pub fn result_for(&self, player: Player) -> GameResult {
        if player == self.winner {
            GameResult::Win
        } else {
            GameResult::Loss
        }
    }
}

/// Plays `board` to the end. `first` moves for player one, `second` for
/// player two, each with a fresh `time_limit` per move.
pub fn play_game(
    mut board: Board,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    time_limit: Duration,
) -> GameRecord {
    let mut moves = Vec::new();

    let (loser, termination) = loop {
        let player = board.active_player();
        let agent: &mut dyn Agent = match player {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };

        let legal = legal_moves(&board);
        if legal.is_empty() {
            break (player, Termination::NoLegalMoves);
        }

        let timer = MoveTimer::start(time_limit);
        let chosen = agent.get_move(&board.clone(), &legal, &timer);
        if timer.time_left_ms() < 0.0 {
            debug!("{} answered {:?} after its deadline", agent.name(), timer.elapsed());
            break (player, Termination::Timeout);
        }

        match chosen {
            Some(mv) if legal.contains(&mv) => {
                board.apply_move(mv);
                moves.push(mv);
            }
            other => {
                debug!("{} forfeits with {:?}", agent.name(), other);
                break (player, Termination::Forfeit);
            }
        }
    };

    GameRecord {
        winner: loser.opponent(),
        termination,
        moves,
        final_board: board,
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Rounds to play; each round is two games
    pub num_matches: u32,
    pub time_limit: Duration,
    /// Empty board every game starts from
    pub board: Board,
    /// Seeds the random openings
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_matches: 5,
            time_limit: Duration::from_millis(150),
            board: Board::standard(),
            seed: None,
        }
    }
}

/// Runs matches between two agents
pub struct MatchRunner {
    config: MatchConfig,
    rng: StdRng,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// A random opening: one random placement for each player.
    ///
    /// Stops early if a player has nothing to play.
    pub fn random_opening(&mut self) -> Board {
        let mut board = self.config.board.clone();
        for _ in 0..2 {
            let moves = legal_moves(&board);
            match moves.choose(&mut self.rng) {
                Some(&mv) => board.apply_move(mv),
                None => break,
            }
        }
        board
    }

    /// Run a match between two agents
    ///
    /// Every round plays the same random opening twice, once with each agent
    /// moving first. Returns the result from `a`'s perspective.
    pub fn run_match(&mut self, a: &mut dyn Agent, b: &mut dyn Agent) -> MatchResult {
        let mut result = MatchResult::new();

        for round in 0..self.config.num_matches {
            let opening = self.random_opening();

            for a_first in [true, false] {
                a.new_game();
                b.new_game();
                let (game, a_player) = if a_first {
                    (play_game(opening.clone(), a, b, self.config.time_limit), Player::One)
                } else {
                    (play_game(opening.clone(), b, a, self.config.time_limit), Player::Two)
                };

                let a_result = game.result_for(a_player);
                result.record(a_result, game.termination);

                let (winner, loser) = match a_result {
                    GameResult::Win => (a.name(), b.name()),
                    GameResult::Loss => (b.name(), a.name()),
                };
                info!(
                    "Round {}/{}: {} beats {} ({}, {} moves) - Score: {}-{}",
                    round + 1,
                    self.config.num_matches,
                    winner,
                    loser,
                    game.termination,
                    game.moves.len(),
                    result.wins,
                    result.losses
                );
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
