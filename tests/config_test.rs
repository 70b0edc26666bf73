//! Tests for play configuration loading.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use strictly_tictactoe::{GameMode, PlayConfig, Player};

#[test]
fn test_default_config_values() {
    let config = PlayConfig::default();
    assert_eq!(*config.mode(), GameMode::Computer);
    assert_eq!(*config.computer_mark(), Player::O);
    assert_eq!(config.computer_delay(), Duration::from_millis(300));
    assert!(*config.pruning());
}

#[test]
fn test_loads_all_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(
        &path,
        r#"mode = "pvp"
computer_mark = "X"
computer_delay_ms = 0
pruning = false
"#,
    )
    .expect("Failed to write TOML");

    let config = PlayConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.mode(), GameMode::Pvp);
    assert_eq!(*config.computer_mark(), Player::X);
    assert_eq!(*config.computer_delay_ms(), 0);
    assert!(!*config.pruning());
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("partial.toml");
    fs::write(&path, "computer_delay_ms = 50\n").expect("Failed to write TOML");

    let config = PlayConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.computer_delay_ms(), 50);
    assert_eq!(*config.mode(), GameMode::Computer);
    assert_eq!(*config.computer_mark(), Player::O);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = PlayConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, PlayConfig::default());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "mode = \"tournament\"").expect("Write failed");

    let err = PlayConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_replace_file_values() {
    let config = PlayConfig::default()
        .with_mode(GameMode::Pvp)
        .with_computer_mark(Player::X)
        .with_computer_delay_ms(5)
        .with_pruning(false);
    assert_eq!(*config.mode(), GameMode::Pvp);
    assert_eq!(*config.computer_mark(), Player::X);
    assert_eq!(config.computer_delay(), Duration::from_millis(5));
    assert!(!*config.pruning());
}
