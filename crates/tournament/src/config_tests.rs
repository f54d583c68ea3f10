use super::*;
use agents::CATALOG;
use rps_core::ConfigError;

#[test]
fn defaults_reproduce_the_full_run() {
    let config = TournamentConfig::default();
    assert_eq!(config.episode_steps, 1000);
    assert_eq!(config.signs, 3);
    assert_eq!(config.roster_names().len(), CATALOG.len());
    assert!(!config.parallel);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let config = TournamentConfig::from_toml_str(
        r#"
        episode_steps = 50
        seed = 7
        roster = ["rock", "paper", "scissors"]
        "#,
    )
    .unwrap();

    assert_eq!(config.episode_steps, 50);
    assert_eq!(config.signs, 3);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.resolve_seed(), 7);
    assert_eq!(config.roster_names(), vec!["rock", "paper", "scissors"]);
}

#[test]
fn malformed_toml_is_an_error() {
    let err = TournamentConfig::from_toml_str("episode_steps = \"many\"").unwrap_err();
    assert!(matches!(err, TournamentError::Toml(_)));
}

#[test]
fn invalid_game_parameters_are_rejected() {
    let config = TournamentConfig {
        signs: 1,
        ..Default::default()
    };
    assert_eq!(config.configuration(), Err(ConfigError::TooFewSigns(1)));

    let config = TournamentConfig {
        episode_steps: 0,
        ..Default::default()
    };
    assert_eq!(config.configuration(), Err(ConfigError::NoEpisodeSteps));
}

#[test]
fn single_agent_roster_is_rejected() {
    let config = TournamentConfig {
        roster: Some(vec!["rock".to_string()]),
        ..Default::default()
    };
    let err = config.build_roster(1).unwrap_err();
    assert!(matches!(err, TournamentError::Config(ConfigError::RosterTooSmall(1))));
}

#[test]
fn unknown_roster_name_is_rejected() {
    let config = TournamentConfig {
        roster: Some(vec!["rock".to_string(), "spock".to_string()]),
        ..Default::default()
    };
    let err = config.build_roster(1).unwrap_err();
    assert!(matches!(err, TournamentError::Roster(_)));
}
