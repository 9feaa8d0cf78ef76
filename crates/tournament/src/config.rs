//! Tournament configuration and the agent roster.
//!
//! ```toml
//! width = 7
//! height = 7
//! time_limit_ms = 150
//! num_matches = 5
//! seed = 42
//!
//! [[opponents]]
//! name = "AB_Open"
//! agent = { kind = "search", method = "alphabeta", iterative = false, search_depth = 5, heuristic = "open_move" }
//!
//! [[challengers]]
//! name = "Student"
//! agent = { kind = "search", method = "alphabeta", heuristic = "custom" }
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use baseline_engine::{GreedyEngine, RandomEngine};
use isolation_core::{Agent, Board};
use search_engine::{AgentConfig, Heuristic, SearchAgent, SearchMethod};
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// How a roster entry plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentKind {
    Random,
    Greedy { heuristic: Heuristic },
    Search(AgentConfig),
}

/// A named roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub name: String,
    pub agent: AgentKind,
}

impl Contestant {
    pub fn new(name: impl Into<String>, agent: AgentKind) -> Self {
        Self {
            name: name.into(),
            agent,
        }
    }

    fn fixed(name: &str, method: SearchMethod, depth: u32, heuristic: Heuristic) -> Self {
        Self::new(
            name,
            AgentKind::Search(AgentConfig::fixed(method, depth, heuristic)),
        )
    }

    fn iterative(name: &str, heuristic: Heuristic) -> Self {
        Self::new(
            name,
            AgentKind::Search(AgentConfig::iterative(SearchMethod::AlphaBeta, heuristic)),
        )
    }

    pub fn validate(&self) -> Result<(), TournamentError> {
        match &self.agent {
            AgentKind::Search(config) => {
                config.validate().map_err(|source| TournamentError::Agent {
                    name: self.name.clone(),
                    source,
                })
            }
            AgentKind::Random | AgentKind::Greedy { .. } => Ok(()),
        }
    }

    /// A fresh agent for this entry. A seeded random agent is reproducible.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Agent> {
        match &self.agent {
            AgentKind::Random => {
                let engine = match seed {
                    Some(seed) => RandomEngine::seeded(seed),
                    None => RandomEngine::new(),
                };
                Box::new(engine.with_name(self.name.clone()))
            }
            AgentKind::Greedy { heuristic } => {
                Box::new(GreedyEngine::with_evaluator(self.name.clone(), *heuristic))
            }
            AgentKind::Search(config) => {
                Box::new(SearchAgent::new(self.name.clone(), config.clone()))
            }
        }
    }
}

/// Random, then fixed-depth minimax and alpha-beta on the three sample heuristics.
pub fn default_opponents() -> Vec<Contestant> {
    let mut roster = vec![Contestant::new("Random", AgentKind::Random)];
    for (prefix, method, depth) in [
        ("MM", SearchMethod::Minimax, 3),
        ("AB", SearchMethod::AlphaBeta, 5),
    ] {
        for (suffix, heuristic) in [
            ("Null", Heuristic::Null),
            ("Open", Heuristic::OpenMove),
            ("Improved", Heuristic::Improved),
        ] {
            let name = format!("{prefix}_{suffix}");
            roster.push(Contestant::fixed(&name, method, depth, heuristic));
        }
    }
    roster
}

/// Iterative alpha-beta on the improved score, and on the custom score.
pub fn default_challengers() -> Vec<Contestant> {
    vec![
        Contestant::iterative("ID_Improved", Heuristic::Improved),
        Contestant::iterative("Student", Heuristic::Custom),
    ]
}

/// Settings for a gauntlet: every challenger plays every opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub width: u8,
    pub height: u8,
    /// Wall-clock budget per move
    pub time_limit_ms: u64,
    /// Rounds per pairing; each round is two games with the same opening
    pub num_matches: u32,
    /// Seeds the openings and the random agents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub opponents: Vec<Contestant>,
    pub challengers: Vec<Contestant>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            width: Board::DEFAULT_SIZE,
            height: Board::DEFAULT_SIZE,
            time_limit_ms: 150,
            num_matches: 5,
            seed: None,
            opponents: default_opponents(),
            challengers: default_challengers(),
        }
    }
}

impl TournamentConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    /// An empty board of the configured size.
    pub fn board(&self) -> Result<Board, TournamentError> {
        Ok(Board::new(self.width, self.height)?)
    }

    /// Looks a name up among the opponents, then the challengers.
    pub fn find(&self, name: &str) -> Result<&Contestant, TournamentError> {
        self.opponents
            .iter()
            .chain(&self.challengers)
            .find(|c| c.name == name)
            .ok_or_else(|| TournamentError::UnknownAgent(name.to_string()))
    }

    pub fn validate(&self) -> Result<(), TournamentError> {
        self.board()?;
        if self.num_matches == 0 {
            return Err(TournamentError::ZeroMatches);
        }
        let mut seen = HashSet::new();
        for contestant in self.opponents.iter().chain(&self.challengers) {
            if !seen.insert(contestant.name.as_str()) {
                return Err(TournamentError::DuplicateName(contestant.name.clone()));
            }
            contestant.validate()?;
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, TournamentError> {
        let config: TournamentConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TournamentError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, TournamentError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
