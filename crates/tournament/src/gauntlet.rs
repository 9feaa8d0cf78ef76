//! Gauntlet: every challenger against every opponent on the roster.

use log::info;

use crate::config::{Contestant, TournamentConfig};
use crate::error::TournamentError;
use crate::match_runner::{MatchConfig, MatchRunner};
use crate::results::{MatchResult, TournamentResults};

fn match_config(config: &TournamentConfig) -> Result<MatchConfig, TournamentError> {
    Ok(MatchConfig {
        num_matches: config.num_matches,
        time_limit: config.time_limit(),
        board: config.board()?,
        seed: config.seed,
    })
}

/// Plays a match between two roster entries; the result is from `a`'s side.
pub fn run_pairing(
    config: &TournamentConfig,
    a: &Contestant,
    b: &Contestant,
) -> Result<MatchResult, TournamentError> {
    config.validate()?;
    let mut runner = MatchRunner::new(match_config(config)?);
    Ok(play_pairing(&mut runner, config.seed, a, b))
}

fn play_pairing(
    runner: &mut MatchRunner,
    seed: Option<u64>,
    a: &Contestant,
    b: &Contestant,
) -> MatchResult {
    info!("--- {} vs {} ---", a.name, b.name);
    let mut first = a.build(seed);
    let mut second = b.build(seed.map(|s| s.wrapping_add(1)));
    let result = runner.run_match(first.as_mut(), second.as_mut());
    info!(
        "{} vs {}: {}-{} ({:.1}%)",
        a.name,
        b.name,
        result.wins,
        result.losses,
        result.win_rate() * 100.0
    );
    result
}

/// Runs the whole gauntlet described by `config`.
pub fn run_gauntlet(config: &TournamentConfig) -> Result<TournamentResults, TournamentError> {
    config.validate()?;
    let mut runner = MatchRunner::new(match_config(config)?);

    let mut results = TournamentResults::new(
        "Gauntlet",
        config.challengers.iter().map(|c| c.name.clone()).collect(),
        config.opponents.iter().map(|c| c.name.clone()).collect(),
        config.time_limit_ms,
        config.num_matches,
    );

    for challenger in &config.challengers {
        info!("*** Evaluating {} ***", challenger.name);
        for opponent in &config.opponents {
            let result = play_pairing(&mut runner, config.seed, challenger, opponent);
            results.add_match(&challenger.name, &opponent.name, result);
        }
        info!(
            "{} overall win rate: {:.2}%",
            challenger.name,
            results.win_rate(&challenger.name) * 100.0
        );
    }

    Ok(results)
}

#[cfg(test)]
#[path = "gauntlet_tests.rs"]
mod gauntlet_tests;
