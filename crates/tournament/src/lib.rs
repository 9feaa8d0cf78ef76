//! Tournament Runner for Isolation agents
//!
//! This crate provides infrastructure for:
//! - Playing timed games between agents and adjudicating timeouts and forfeits
//! - Running a gauntlet of challengers against a fixed roster of opponents
//! - Reporting win rates and storing results as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run the default gauntlet
//! cargo run -p tournament -- gauntlet --matches 5 --time-limit 150
//!
//! # Run a match between two roster entries
//! cargo run -p tournament -- match Student AB_Improved
//! ```

mod config;
mod error;
mod gauntlet;
mod match_runner;
mod results;

pub use config::*;
pub use error::TournamentError;
pub use gauntlet::*;
pub use match_runner::*;
pub use results::*;
