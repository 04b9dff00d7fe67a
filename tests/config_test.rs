//! Tests for configuration loading.

use std::io::Write;
use timed_tictactoe::{ConfigOverrides, Difficulty, GameConfig, GameMode};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.turn_seconds(), 30);
    assert_eq!(*config.computer_delay_ms(), 500);
    assert_eq!(*config.mode(), GameMode::HumanVsHuman);
    assert_eq!(*config.difficulty(), Difficulty::Easy);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
turn_seconds = 15
mode = "human-vs-computer"
difficulty = "hard"
player_x = "Ada"
seed = 42
"#
    )
    .expect("write config");

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.turn_seconds(), 15);
    assert_eq!(*config.computer_delay_ms(), 500);
    assert_eq!(*config.mode(), GameMode::HumanVsComputer);
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(config.player_x().as_deref(), Some("Ada"));
    assert_eq!(*config.player_o(), None);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_zero_turn_seconds_rejected() {
    let err = GameConfig::from_toml("turn_seconds = 0").unwrap_err();
    assert!(err.message.contains("turn_seconds"));
}

#[test]
fn test_computer_delay_must_fit_in_turn() {
    let err = GameConfig::from_toml(
        "turn_seconds = 1\ncomputer_delay_ms = 5000\nmode = \"human-vs-computer\"",
    )
    .unwrap_err();
    assert!(err.message.contains("computer_delay_ms"));

    let err = GameConfig::from_toml("turn_seconds = 2\ncomputer_delay_ms = 2000").unwrap_err();
    assert!(err.message.contains("computer_delay_ms"));

    let config =
        GameConfig::from_toml("turn_seconds = 2\ncomputer_delay_ms = 1999").expect("delay fits");
    assert_eq!(*config.computer_delay_ms(), 1999);
}

#[test]
fn test_delay_override_checked_against_budget() {
    let err = GameConfig::default()
        .with_overrides(ConfigOverrides {
            turn_seconds: Some(1),
            ..Default::default()
        })
        .and_then(|config| {
            config.with_overrides(ConfigOverrides {
                computer_delay_ms: Some(1000),
                ..Default::default()
            })
        })
        .unwrap_err();
    assert!(err.message.contains("computer_delay_ms"));
}

#[test]
fn test_unknown_key_rejected() {
    let err = GameConfig::from_toml("turn_secs = 10").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_win_over_file() {
    let config = GameConfig::from_toml("turn_seconds = 20\nplayer_o = \"Bob\"")
        .expect("valid config")
        .with_overrides(ConfigOverrides {
            turn_seconds: Some(5),
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        })
        .expect("valid overrides");
    assert_eq!(*config.turn_seconds(), 5);
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(config.player_o().as_deref(), Some("Bob"));

    let err = config
        .with_overrides(ConfigOverrides {
            turn_seconds: Some(0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(err.to_string().starts_with("Config error:"));
}
