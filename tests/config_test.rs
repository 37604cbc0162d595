//! Loading game configuration from disk.

use std::io::Write;
use std::time::Duration;
use strictly_gomoku_play::GameConfig;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "clock_seconds = 180").unwrap();
    writeln!(file, "tick_millis = 250").unwrap();
    writeln!(file, "log_filter = \"debug,strictly_gomoku=trace\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.clock_seconds(), 180);
    assert_eq!(config.tick_period(), Duration::from_millis(250));
    assert_eq!(config.log_filter(), "debug,strictly_gomoku=trace");
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_zero_tick_rejected_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tick_millis = 0").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}
