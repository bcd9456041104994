//! Tests for loading the application config.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

use strictly_games::AppConfig;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Write failed");
    file
}

#[test]
fn test_from_file_reads_all_fields() {
    let file = write_config(
        r#"
results_path = "scores.json"
leaderboard_limit = 3
log_filter = "debug"
player1_name = "Ann"
player2_name = "Bob"
"#,
    );
    let config = AppConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.results_path(), &PathBuf::from("scores.json"));
    assert_eq!(*config.leaderboard_limit(), 3);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.player1_name(), "Ann");
    assert_eq!(config.player2_name(), "Bob");
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("player1_name = \"Ann\"\n");
    let config = AppConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.player1_name(), "Ann");
    assert_eq!(config.player2_name(), "Player 2");
    assert_eq!(config.results_path(), AppConfig::default().results_path());
}

#[test]
fn test_load_or_default_without_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig::load_or_default(dir.path().join("dao.toml")).expect("Load failed");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_zero_limit_fails_validation() {
    let file = write_config("leaderboard_limit = 0\n");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("leaderboard_limit"));
}

#[test]
fn test_invalid_toml_fails() {
    let file = write_config("leaderboard_limit = \"many\"\n");
    assert!(AppConfig::load_or_default(file.path()).is_err());
}

#[test]
fn test_with_results_path() {
    let config = AppConfig::default().with_results_path("elsewhere.json");
    assert_eq!(config.results_path(), &PathBuf::from("elsewhere.json"));
}
