//! Unit tests for CLI module
//!
//! Tests command registry, dispatch and formatting against an in-memory
//! player and catalog.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::{
    cli::{CliError, CliService, CommandRegistry, formatting::format_duration},
    config::{Config, PlayerConfig},
    services::{Episode, EpisodeCatalog, PlayerState},
};

fn catalog() -> EpisodeCatalog {
    EpisodeCatalog::new(vec![
        Episode::new("Pilot", "Ana", "", 61.0, "https://cdn.example.com/1.mp3"),
        Episode::new("Borrowing", "Bruno", "", 3600.0, "https://cdn.example.com/2.mp3"),
        Episode::new("Channels", "Carla", "", 59.0, "https://cdn.example.com/3.mp3"),
    ])
    .unwrap()
}

fn service() -> (CliService, Arc<PlayerState>) {
    let player = Arc::new(PlayerState::with_seed(PlayerConfig::default(), 1));
    let service = CliService::new(
        Arc::clone(&player),
        Arc::new(catalog()),
        Arc::new(Config::default()),
    );
    (service, player)
}

fn run(service: &CliService, line: &str) -> Result<String, CliError> {
    service.execute_line(line)
}

#[test]
fn lists_categories_sorted() {
    let (service, _) = service();

    let categories: Vec<String> = service.list_all().into_iter().map(|(c, _)| c).collect();

    assert_eq!(categories, vec!["config", "episodes", "player"]);
}

#[test]
fn registers_every_player_command() {
    let (service, _) = service();

    let player_commands = service
        .list_all()
        .into_iter()
        .find(|(category, _)| category == "player")
        .map(|(_, commands)| commands)
        .unwrap();

    assert_eq!(
        player_commands,
        vec![
            "clear",
            "ended",
            "loop",
            "next",
            "play",
            "play-list",
            "previous",
            "set-playing",
            "shuffle",
            "status",
            "toggle-play",
        ]
    );
}

#[test]
fn unknown_category_and_command() {
    let (service, _) = service();

    assert!(matches!(
        run(&service, "radio tune"),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        run(&service, "player rewind"),
        Err(CliError::CommandNotFound(_))
    ));
}

#[test]
fn validates_argument_counts() {
    let (service, _) = service();

    assert!(matches!(
        run(&service, "player play"),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        run(&service, "player next now"),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn blank_line_is_ignored() {
    let (service, _) = service();

    assert_eq!(run(&service, "   ").unwrap(), "");
}

#[test]
fn play_list_then_navigate() {
    let (service, player) = service();

    let output = run(&service, "player play-list 2").unwrap();
    assert_eq!(output, "Queued 3 episodes, playing: Borrowing");

    assert_eq!(run(&service, "player next").unwrap(), "Now playing: Channels");
    assert_eq!(
        run(&service, "player next").unwrap(),
        "Already at the last episode"
    );
    assert_eq!(run(&service, "player previous").unwrap(), "Now playing: Borrowing");

    let snapshot = player.snapshot();
    assert_eq!(snapshot.current_episode_index, 1);
    assert!(snapshot.is_playing);
}

#[test]
fn play_by_title_replaces_queue() {
    let (service, player) = service();
    run(&service, "player play-list").unwrap();

    assert_eq!(run(&service, "player play chan").unwrap(), "Playing: Channels");

    let snapshot = player.snapshot();
    assert_eq!(snapshot.episode_list.len(), 1);
    assert_eq!(snapshot.current_episode_index, 0);
}

#[test]
fn multi_word_title_fragment_is_kept_whole() {
    let catalog = EpisodeCatalog::new(vec![
        Episode::new("First Episode", "Ana", "", 60.0, "https://cdn.example.com/a.mp3"),
        Episode::new("Second Episode", "Ana", "", 60.0, "https://cdn.example.com/b.mp3"),
    ])
    .unwrap();
    let player = Arc::new(PlayerState::default());
    let service = CliService::new(
        Arc::clone(&player),
        Arc::new(catalog),
        Arc::new(Config::default()),
    );

    assert_eq!(
        run(&service, "player play second   episode").unwrap(),
        "Playing: Second Episode"
    );
    assert!(matches!(
        run(&service, "player next now"),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn play_unknown_episode_reports_catalog_error() {
    let (service, player) = service();

    assert!(matches!(
        run(&service, "player play 9"),
        Err(CliError::Catalog(_))
    ));
    assert!(player.snapshot().is_empty());
}

#[test]
fn toggles_report_new_state() {
    let (service, _) = service();

    assert_eq!(run(&service, "player loop").unwrap(), "Loop: on");
    assert_eq!(run(&service, "player loop").unwrap(), "Loop: off");
    assert_eq!(run(&service, "player shuffle").unwrap(), "Shuffle: on");
    assert_eq!(run(&service, "player toggle-play").unwrap(), "Playback: on");
}

#[test]
fn set_playing_parses_booleans() {
    let (service, player) = service();

    run(&service, "player set-playing on").unwrap();
    assert!(player.snapshot().is_playing);

    run(&service, "player set-playing FALSE").unwrap();
    assert!(!player.snapshot().is_playing);

    assert!(matches!(
        run(&service, "player set-playing maybe"),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn ended_follows_track_end_policy() {
    let (service, player) = service();
    run(&service, "player play-list 2").unwrap();

    assert_eq!(run(&service, "player ended").unwrap(), "Now playing: Channels");
    assert_eq!(run(&service, "player ended").unwrap(), "Playback finished");
    assert!(!player.snapshot().is_playing);

    run(&service, "player loop").unwrap();
    assert_eq!(run(&service, "player ended").unwrap(), "Replaying: Channels");
    assert!(player.snapshot().is_playing);
}

#[test]
fn clear_empties_queue() {
    let (service, player) = service();
    run(&service, "player play-list").unwrap();

    run(&service, "player clear").unwrap();

    assert!(player.snapshot().is_empty());
    assert!(!player.snapshot().is_playing);
}

#[test]
fn status_renders_text_and_json() {
    let (service, _) = service();
    run(&service, "player play-list 1").unwrap();

    let text = run(&service, "player status").unwrap();
    assert!(text.contains("Pilot (1/3)"));
    assert!(text.contains("next: on"));

    let json: serde_json::Value =
        serde_json::from_str(&run(&service, "player status json").unwrap()).unwrap();
    assert_eq!(json["current_episode_index"], 0);
    assert_eq!(json["has_next"], true);

    assert!(matches!(
        run(&service, "player status xml"),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn episodes_list_numbers_from_one() {
    let (service, _) = service();

    let output = run(&service, "episodes list").unwrap();

    assert!(output.contains("1. Pilot [1:01]"));
    assert!(output.contains("2. Borrowing [1:00:00]"));
}

#[test]
fn config_commands_render() {
    let (service, _) = service();

    let shown = run(&service, "config show").unwrap();
    assert!(shown.contains("stop_on_clear = true"));

    let schema: serde_json::Value =
        serde_json::from_str(&run(&service, "config schema").unwrap()).unwrap();
    assert!(schema["properties"].get("player").is_some());
}

#[test]
fn help_lists_commands_and_arguments() {
    let (service, _) = service();

    let overview = run(&service, "help").unwrap();
    assert!(overview.contains("play-list"));
    assert!(overview.contains("schema"));

    let player_help = run(&service, "player help").unwrap();
    assert!(player_help.contains("[episode]"));
    assert!(player_help.contains("<state>"));

    assert!(matches!(
        run(&service, "radio help"),
        Err(CliError::CommandNotFound(_))
    ));
}

#[test]
fn empty_registry_has_no_commands() {
    let registry = CommandRegistry::new();

    assert!(registry.list_commands().is_empty());
    assert!(registry.category_metadata("player").is_empty());
}

#[test]
fn duration_formatting() {
    assert_eq!(format_duration(0.0), "0:00");
    assert_eq!(format_duration(-5.0), "0:00");
    assert_eq!(format_duration(59.99), "0:59");
    assert_eq!(format_duration(3599.0), "59:59");
    assert_eq!(format_duration(36_000.0), "10:00:00");
}
