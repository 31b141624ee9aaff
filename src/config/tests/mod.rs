//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! File-backed loading uses temporary directories.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::{
    PodplayerError,
    config::{Config, LogLevel, PlayerConfig},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert!(config.player.stop_on_clear);
    assert!(!config.player.shuffle_avoids_repeat);
    assert!(config.player.autoplay_next);
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[player]"));
    assert!(toml_str.contains("log_level = \"info\""));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [player]
        stop_on_clear = false
        shuffle_avoids_repeat = true
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert!(!config.player.stop_on_clear);
    assert!(config.player.shuffle_avoids_repeat);
    assert!(config.player.autoplay_next);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_player_section_keeps_defaults() {
    let config = Config::from_toml_str("[player]\nautoplay_next = false\n").unwrap();

    assert_eq!(
        config.player,
        PlayerConfig {
            autoplay_next: false,
            ..PlayerConfig::default()
        }
    );
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [general
        invalid syntax here
    "#;

    let result = Config::from_toml_str(invalid_toml);

    assert!(matches!(
        result,
        Err(PodplayerError::TomlParseError { ref location, .. }) if location == "string"
    ));
}

#[test]
fn config_rejects_unknown_log_level() {
    let result = Config::from_toml_str("[general]\nlog_level = \"loud\"\n");

    assert!(result.is_err());
}

#[test]
fn config_unknown_fields() {
    let toml_with_unknown = r#"
        [general]
        log_level = "warn"
        unknown_field = "should be ignored"

        [unknown_section]
        some_field = "ignored"
    "#;

    let config = Config::from_toml_str(toml_with_unknown).unwrap();
    assert_eq!(config.general.log_level, LogLevel::Warn);
}

#[test]
fn load_or_default_without_file() {
    let temp = TempDir::new().unwrap();

    let config = Config::load_or_default(&temp.path().join("missing.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_from_file_reports_path_on_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[player\n").unwrap();

    let result = Config::load_from_file(&path);

    match result {
        Err(PodplayerError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("expected TOML parse error, got {other:?}"),
    }
}

#[test]
fn load_from_file_reads_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[general]\nlog_level = \"trace\"\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Trace);
}

#[test]
fn log_level_filter_directives() {
    assert_eq!(LogLevel::Error.as_filter(), "error");
    assert_eq!(LogLevel::Debug.to_string(), "debug");
}
