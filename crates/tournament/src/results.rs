//! Match and tournament results, storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::Termination;

/// Result of a single game from one agent's point of view.
///
/// Isolation has no draws: somebody always runs out of moves first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
}

/// Result of a match (several games) from the first agent's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    /// Losses caused by running out of time
    pub timeouts: u32,
    /// Losses caused by passing or playing an illegal move
    pub forfeits: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult, termination: Termination) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => {
                self.losses += 1;
                match termination {
                    Termination::Timeout => self.timeouts += 1,
                    Termination::Forfeit => self.forfeits += 1,
                    Termination::NoLegalMoves => {}
                }
            }
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of games won; 0 when nothing was played.
    pub fn win_rate(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 / total as f64
    }

    pub fn merge(&mut self, other: &MatchResult) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.timeouts += other.timeouts;
        self.forfeits += other.forfeits;
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEntry {
    pub challenger: String,
    pub opponent: String,
    pub result: MatchResult,
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    pub challengers: Vec<String>,
    pub opponents: Vec<String>,
    pub matches: Vec<MatchEntry>,
    pub time_limit_ms: u64,
    pub num_matches: u32,
}

impl TournamentResults {
    pub fn new(
        name: &str,
        challengers: Vec<String>,
        opponents: Vec<String>,
        time_limit_ms: u64,
        num_matches: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            challengers,
            opponents,
            matches: Vec::new(),
            time_limit_ms,
            num_matches,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, challenger: &str, opponent: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            challenger: challenger.to_string(),
            opponent: opponent.to_string(),
            result,
        });
    }

    /// All of `challenger`'s games added together.
    pub fn totals(&self, challenger: &str) -> MatchResult {
        let mut total = MatchResult::new();
        for entry in self.matches.iter().filter(|e| e.challenger == challenger) {
            total.merge(&entry.result);
        }
        total
    }

    /// Overall win rate of `challenger` across every opponent.
    pub fn win_rate(&self, challenger: &str) -> f64 {
        self.totals(challenger).win_rate()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Challengers: {}\n", self.challengers.join(", ")));
        report.push_str(&format!("Opponents: {}\n", self.opponents.join(", ")));
        report.push_str(&format!(
            "Config: {} rounds/pairing (2 games each), {} ms/move\n\n",
            self.num_matches, self.time_limit_ms
        ));

        report.push_str(&format!(
            "{:<14} vs {:<14} {:>5}-{:<5} {:>8} {:>8}\n",
            "Challenger", "Opponent", "W", "L", "Timeout", "Forfeit"
        ));
        report.push_str(&"-".repeat(64));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<14} vs {:<14} {:>5}-{:<5} {:>8} {:>8}\n",
                entry.challenger,
                entry.opponent,
                entry.result.wins,
                entry.result.losses,
                entry.result.timeouts,
                entry.result.forfeits
            ));
        }

        report.push('\n');
        for challenger in &self.challengers {
            report.push_str(&format!(
                "{:<14} win rate: {:.2}%\n",
                challenger,
                self.win_rate(challenger) * 100.0
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
