//! Error types for the search agent.

use std::path::PathBuf;

use thiserror::Error;

/// The time guard fired: the remaining time dropped below the threshold.
///
/// Raised only by [`crate::TimeGuard::check`] and caught only by the
/// iterative-deepening driver. Every search frame in between passes it up
/// with `?`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("search cancelled with {remaining_ms:.1}ms left (threshold {threshold_ms:.1}ms)")]
pub struct SearchCancelled {
    pub remaining_ms: f64,
    pub threshold_ms: f64,
}

/// Errors raised while loading or validating an agent configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("search depth must be a positive integer")]
    ZeroDepth,

    #[error("timeout threshold must be a positive number of milliseconds, got {0}")]
    InvalidThreshold(f64),

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
