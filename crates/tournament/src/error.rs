//! Error types for the tournament runner.

use std::path::PathBuf;

use isolation_core::BoardError;
use search_engine::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("agent {name}: {source}")]
    Agent {
        name: String,
        #[source]
        source: ConfigError,
    },

    #[error("no agent named {0:?} in the roster")]
    UnknownAgent(String),

    #[error("agent name {0:?} is used more than once")]
    DuplicateName(String),

    #[error("matches per pairing must be positive")]
    ZeroMatches,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tournament config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize tournament config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid results JSON: {0}")]
    Json(#[from] serde_json::Error),
}
