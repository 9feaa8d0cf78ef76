use super::*;
use crate::config::AgentKind;
use search_engine::{AgentConfig, Heuristic, SearchMethod};

fn small_config() -> TournamentConfig {
    TournamentConfig {
        width: 5,
        height: 5,
        time_limit_ms: 2_000,
        num_matches: 1,
        seed: Some(17),
        opponents: vec![
            Contestant::new("Random", AgentKind::Random),
            Contestant::new(
                "Greedy",
                AgentKind::Greedy {
                    heuristic: Heuristic::Improved,
                },
            ),
        ],
        challengers: vec![Contestant::new(
            "AB_3",
            AgentKind::Search(AgentConfig::fixed(
                SearchMethod::AlphaBeta,
                3,
                Heuristic::Improved,
            )),
        )],
    }
}

#[test]
fn test_gauntlet_plays_every_pairing() {
    let config = small_config();
    let results = run_gauntlet(&config).unwrap();

    assert_eq!(results.challengers, ["AB_3"]);
    assert_eq!(results.opponents, ["Random", "Greedy"]);
    assert_eq!(results.matches.len(), 2);
    for entry in &results.matches {
        assert_eq!(entry.challenger, "AB_3");
        assert_eq!(entry.result.total_games(), 2);
        assert_eq!(entry.result.timeouts + entry.result.forfeits, 0);
    }
}

#[test]
fn test_pairing_between_roster_entries() {
    let config = small_config();
    let a = config.find("Greedy").unwrap();
    let b = config.find("Random").unwrap();
    let result = run_pairing(&config, a, b).unwrap();
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_gauntlet_rejects_invalid_config() {
    let config = TournamentConfig {
        num_matches: 0,
        ..small_config()
    };
    assert!(matches!(
        run_gauntlet(&config),
        Err(TournamentError::ZeroMatches)
    ));
}
