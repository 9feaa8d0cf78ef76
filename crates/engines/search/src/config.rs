//! Agent configuration.
//!
//! Loaded from TOML; every field is optional and falls back to the default
//! agent (depth 3, minimax, iterative deepening, 10 ms threshold):
//!
//! ```toml
//! search_depth = 5
//! method = "alphabeta"
//! iterative = false
//! timeout_ms = 15.0
//! heuristic = "improved"
//! no_moves = "loss"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::deepening::SearchMethod;
use crate::error::ConfigError;
use crate::eval::Heuristic;
use crate::search::NoMovesPolicy;

/// Per-agent search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Plies searched in fixed-depth mode (ignored when iterative)
    pub search_depth: u32,
    /// Depth-limited search run by the driver
    pub method: SearchMethod,
    /// Iterative deepening until the time guard fires, or one fixed-depth search
    pub iterative: bool,
    /// Remaining milliseconds below which the search is cancelled.
    /// Must exceed the cost of one more recursive level, or the agent
    /// may answer after its deadline.
    pub timeout_ms: f64,
    /// Leaf evaluation
    pub heuristic: Heuristic,
    /// Score of a node whose mover has no legal moves
    pub no_moves: NoMovesPolicy,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            method: SearchMethod::Minimax,
            iterative: true,
            timeout_ms: 10.0,
            heuristic: Heuristic::Custom,
            no_moves: NoMovesPolicy::Neutral,
        }
    }
}

impl AgentConfig {
    /// Fixed-depth search with `method` at `depth`.
    pub fn fixed(method: SearchMethod, depth: u32, heuristic: Heuristic) -> Self {
        Self {
            search_depth: depth,
            method,
            iterative: false,
            heuristic,
            ..Default::default()
        }
    }

    /// Iterative deepening with `method`.
    pub fn iterative(method: SearchMethod, heuristic: Heuristic) -> Self {
        Self {
            method,
            iterative: true,
            heuristic,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !self.timeout_ms.is_finite() || self.timeout_ms <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.timeout_ms));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
