//! Unit tests for the player state
//!
//! Covers navigation, flag handling, queue replacement edge cases and
//! subscriber notification. Shuffle tests use seeded players.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use futures::StreamExt;

use super::*;
use crate::config::PlayerConfig;

fn episode(title: &str) -> Episode {
    Episode::new(
        title,
        "Host, Guest",
        format!("https://cdn.example.com/{title}.jpg"),
        1800.0,
        format!("https://cdn.example.com/{title}.mp3"),
    )
}

fn queue(titles: &[&str]) -> Vec<Episode> {
    titles.iter().map(|title| episode(title)).collect()
}

fn player_at(titles: &[&str], index: usize) -> PlayerState {
    let player = PlayerState::with_seed(PlayerConfig::default(), 7);
    player.play_list(queue(titles), index).unwrap();
    player
}

fn recorder(player: &PlayerState) -> (Subscription, Arc<Mutex<Vec<PlayerSnapshot>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = player.subscribe(move |snapshot| {
        sink.lock().unwrap().push(snapshot.clone());
    });
    (subscription, seen)
}

mod initial_state {
    use super::*;

    #[test]
    fn starts_empty_and_stopped() {
        let player = PlayerState::default();
        let snapshot = player.snapshot();

        assert!(snapshot.episode_list.is_empty());
        assert_eq!(snapshot.current_episode_index, 0);
        assert!(!snapshot.is_playing);
        assert!(!snapshot.is_looping);
        assert!(!snapshot.is_shuffling);
        assert!(!player.has_previous());
        assert!(!player.has_next());
        assert_eq!(player.current_episode(), None);
    }

    #[test]
    fn navigation_on_empty_queue_is_a_no_op() {
        let player = PlayerState::default();
        player.toggle_shuffle();
        let before = player.snapshot();

        player.play_next();
        player.play_previous();

        assert_eq!(player.snapshot(), before);
    }
}

mod queue_replacement {
    use super::*;

    #[test]
    fn play_replaces_queue_with_single_episode() {
        let player = player_at(&["a", "b", "c"], 2);
        player.set_playing_state(false);

        player.play(episode("solo"));

        let snapshot = player.snapshot();
        assert_eq!(*snapshot.episode_list, vec![episode("solo")]);
        assert_eq!(snapshot.current_episode_index, 0);
        assert!(snapshot.is_playing);
    }

    #[test]
    fn play_list_sets_queue_index_and_playing() {
        let player = PlayerState::default();

        player.play_list(queue(&["a", "b", "c"]), 1).unwrap();

        let snapshot = player.snapshot();
        assert_eq!(*snapshot.episode_list, queue(&["a", "b", "c"]));
        assert_eq!(snapshot.current_episode_index, 1);
        assert!(snapshot.is_playing);
        assert_eq!(snapshot.current_episode().map(|e| e.title.as_str()), Some("b"));
    }

    #[test]
    fn play_list_rejects_out_of_range_index_and_keeps_state() {
        let player = player_at(&["a", "b"], 1);
        let before = player.snapshot();

        let result = player.play_list(queue(&["x", "y", "z"]), 3);

        assert_eq!(result, Err(PlayerError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(player.snapshot(), before);
    }

    #[test]
    fn play_list_accepts_empty_list_at_zero_only() {
        let player = PlayerState::default();

        assert_eq!(
            player.play_list(Vec::new(), 1),
            Err(PlayerError::IndexOutOfRange { index: 1, len: 0 })
        );

        player.play_list(Vec::new(), 0).unwrap();
        let snapshot = player.snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.current_episode_index, 0);
    }

    #[test]
    fn play_list_keeps_loop_and_shuffle_preferences() {
        let player = PlayerState::default();
        player.toggle_loop();
        player.toggle_shuffle();

        player.play_list(queue(&["a"]), 0).unwrap();

        let snapshot = player.snapshot();
        assert!(snapshot.is_looping);
        assert!(snapshot.is_shuffling);
    }
}

mod flags {
    use super::*;

    #[test]
    fn toggle_play_twice_restores_value() {
        let player = player_at(&["a"], 0);
        let original = player.snapshot().is_playing;

        player.toggle_play();
        assert_ne!(player.snapshot().is_playing, original);

        player.toggle_play();
        assert_eq!(player.snapshot().is_playing, original);
    }

    #[test]
    fn toggles_are_independent() {
        let player = PlayerState::default();

        player.toggle_loop();
        assert!(player.snapshot().is_looping);
        assert!(!player.snapshot().is_shuffling);
        assert!(!player.snapshot().is_playing);

        player.toggle_shuffle();
        player.toggle_loop();
        let snapshot = player.snapshot();
        assert!(!snapshot.is_looping);
        assert!(snapshot.is_shuffling);
        assert!(!snapshot.is_playing);
    }

    #[test]
    fn set_playing_state_is_not_a_toggle() {
        let player = player_at(&["a"], 0);

        player.set_playing_state(true);
        assert!(player.snapshot().is_playing);

        player.set_playing_state(false);
        player.set_playing_state(false);
        assert!(!player.snapshot().is_playing);
    }
}

mod navigation {
    use super::*;

    #[test]
    fn next_at_end_of_queue_is_a_no_op() {
        let player = player_at(&["a", "b", "c"], 2);

        assert!(!player.has_next());
        player.play_next();

        assert_eq!(player.snapshot().current_episode_index, 2);
    }

    #[test]
    fn previous_at_start_of_queue_is_a_no_op() {
        let player = player_at(&["a", "b", "c"], 0);

        assert!(!player.has_previous());
        player.play_previous();

        assert_eq!(player.snapshot().current_episode_index, 0);
    }

    #[test]
    fn next_and_previous_step_by_one() {
        let player = player_at(&["a", "b", "c"], 1);

        player.play_previous();
        assert_eq!(player.snapshot().current_episode_index, 0);

        player.play_next();
        player.play_next();
        assert_eq!(player.snapshot().current_episode_index, 2);
    }

    #[test]
    fn looping_does_not_wrap_the_queue() {
        let player = player_at(&["a", "b"], 1);
        player.toggle_loop();

        player.play_next();

        assert_eq!(player.snapshot().current_episode_index, 1);
    }

    #[test]
    fn play_list_then_next_scenario() {
        let player = PlayerState::default();

        player.play_list(queue(&["A", "B", "C"]), 1).unwrap();
        player.play_next();

        let snapshot = player.snapshot();
        assert_eq!(snapshot.current_episode_index, 2);
        assert!(snapshot.is_playing);
        assert_eq!(*snapshot.episode_list, queue(&["A", "B", "C"]));
    }
}

mod shuffle {
    use super::*;

    #[test]
    fn has_next_is_true_while_shuffling_even_at_end() {
        let player = player_at(&["a", "b", "c"], 2);

        player.toggle_shuffle();

        assert!(player.has_next());
    }

    #[test]
    fn shuffled_next_stays_in_bounds() {
        let player = player_at(&["a", "b", "c", "d", "e"], 0);
        player.toggle_shuffle();

        for _ in 0..500 {
            player.play_next();
            assert!(player.snapshot().current_episode_index < 5);
        }
    }

    #[test]
    fn shuffled_next_reaches_every_position() {
        let player = player_at(&["a", "b", "c", "d", "e"], 0);
        player.toggle_shuffle();
        let mut seen = [false; 5];

        for _ in 0..500 {
            player.play_next();
            seen[player.snapshot().current_episode_index] = true;
        }

        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn shuffled_next_on_single_episode_stays_put() {
        let player = player_at(&["only"], 0);
        player.toggle_shuffle();

        player.play_next();

        assert_eq!(player.snapshot().current_episode_index, 0);
    }

    #[test]
    fn avoid_repeat_never_reselects_current() {
        let config = PlayerConfig {
            shuffle_avoids_repeat: true,
            ..PlayerConfig::default()
        };
        let player = PlayerState::with_seed(config, 42);
        player.play_list(queue(&["a", "b", "c"]), 0).unwrap();
        player.toggle_shuffle();

        for _ in 0..300 {
            let before = player.snapshot().current_episode_index;
            player.play_next();
            let after = player.snapshot().current_episode_index;
            assert_ne!(before, after);
            assert!(after < 3);
        }
    }

    #[test]
    fn same_seed_gives_same_order() {
        let order = |seed| {
            let player = PlayerState::with_seed(PlayerConfig::default(), seed);
            player.play_list(queue(&["a", "b", "c", "d"]), 0).unwrap();
            player.toggle_shuffle();
            (0..20)
                .map(|_| {
                    player.play_next();
                    player.snapshot().current_episode_index
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(order(9), order(9));
    }
}

mod clearing {
    use super::*;

    #[test]
    fn clear_empties_queue_and_stops_by_default() {
        let player = player_at(&["a", "b", "c"], 2);
        player.toggle_loop();
        player.toggle_shuffle();

        player.clear_player_state();

        let snapshot = player.snapshot();
        assert!(snapshot.episode_list.is_empty());
        assert_eq!(snapshot.current_episode_index, 0);
        assert!(!snapshot.is_playing);
        assert!(snapshot.is_looping);
        assert!(snapshot.is_shuffling);
    }

    #[test]
    fn clear_can_leave_playing_flag_alone() {
        let config = PlayerConfig {
            stop_on_clear: false,
            ..PlayerConfig::default()
        };
        let player = PlayerState::new(config);
        player.play(episode("a"));

        player.clear_player_state();

        let snapshot = player.snapshot();
        assert!(snapshot.is_empty());
        assert!(snapshot.is_playing);
    }
}

mod subscriptions {
    use super::*;

    #[test]
    fn subscriber_sees_each_change_in_order() {
        let player = PlayerState::default();
        let (_subscription, seen) = recorder(&player);

        player.play_list(queue(&["a", "b"]), 0).unwrap();
        player.play_next();
        player.toggle_play();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].current_episode_index, 0);
        assert!(seen[0].is_playing);
        assert_eq!(seen[1].current_episode_index, 1);
        assert!(!seen[2].is_playing);
        assert_eq!(seen[2], player.snapshot());
    }

    #[test]
    fn unchanged_state_does_not_notify() {
        let player = player_at(&["a", "b"], 1);
        let (_subscription, seen) = recorder(&player);

        player.play_next();
        player.set_playing_state(true);

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let player = PlayerState::default();
        let (subscription, seen) = recorder(&player);
        assert_eq!(player.subscriber_count(), 1);

        player.toggle_loop();
        subscription.unsubscribe();
        player.toggle_loop();

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(player.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_may_mutate_the_player() {
        let player = Arc::new(PlayerState::default());
        let weak = Arc::downgrade(&player);
        let subscription = player.subscribe(move |snapshot| {
            if snapshot.is_looping && !snapshot.is_shuffling {
                if let Some(player) = weak.upgrade() {
                    player.toggle_shuffle();
                }
            }
        });

        player.toggle_loop();

        assert!(player.snapshot().is_shuffling);
        drop(subscription);
    }

    #[test]
    fn nested_change_reaches_later_subscribers_in_order() {
        let player = Arc::new(PlayerState::default());
        let weak = Arc::downgrade(&player);
        let _mutator = player.subscribe(move |snapshot| {
            if snapshot.is_looping && !snapshot.is_shuffling {
                if let Some(player) = weak.upgrade() {
                    player.toggle_shuffle();
                }
            }
        });
        let (_later, seen) = recorder(&player);

        player.toggle_loop();

        let seen = seen.lock().unwrap();
        let flags: Vec<(bool, bool)> = seen
            .iter()
            .map(|snapshot| (snapshot.is_looping, snapshot.is_shuffling))
            .collect();
        assert_eq!(flags, vec![(true, false), (true, true)]);
        assert_eq!(seen.last(), Some(&player.snapshot()));
    }

    #[test]
    fn concurrent_changes_end_on_current_state() {
        let player = Arc::new(PlayerState::default());
        let (_subscription, seen) = recorder(&player);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let player = Arc::clone(&player);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        player.toggle_loop();
                        player.toggle_shuffle();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 200);
        assert_eq!(seen.last(), Some(&player.snapshot()));
    }

    #[tokio::test]
    async fn watch_stream_yields_latest_snapshot() {
        let player = PlayerState::default();
        let mut stream = Box::pin(player.watch());

        let initial = stream.next().await.unwrap();
        assert!(initial.is_empty());

        player.play(episode("a"));
        let updated = stream.next().await.unwrap();
        assert_eq!(updated.current_episode().map(|e| e.title.as_str()), Some("a"));
        assert!(updated.is_playing);
    }
}

mod track_end {
    use super::*;

    #[test]
    fn advances_to_next_episode() {
        let player = player_at(&["a", "b"], 0);
        let policy = TrackEndPolicy::from_config(player.config());

        let outcome = policy.on_track_ended(&player);

        assert_eq!(outcome, TrackEndOutcome::Advanced);
        let snapshot = player.snapshot();
        assert_eq!(snapshot.current_episode_index, 1);
        assert!(snapshot.is_playing);
    }

    #[test]
    fn replays_current_episode_when_looping() {
        let player = player_at(&["a", "b"], 0);
        player.toggle_loop();
        let policy = TrackEndPolicy::from_config(player.config());

        let outcome = policy.on_track_ended(&player);

        assert_eq!(outcome, TrackEndOutcome::Replayed);
        assert_eq!(player.snapshot().current_episode_index, 0);
        assert!(player.snapshot().is_playing);
    }

    #[test]
    fn stops_at_end_of_queue() {
        let player = player_at(&["a", "b"], 1);
        let policy = TrackEndPolicy::from_config(player.config());

        let outcome = policy.on_track_ended(&player);

        assert_eq!(outcome, TrackEndOutcome::Stopped);
        assert_eq!(player.snapshot().current_episode_index, 1);
        assert!(!player.snapshot().is_playing);
    }

    #[test]
    fn stops_when_autoplay_is_disabled() {
        let config = PlayerConfig {
            autoplay_next: false,
            ..PlayerConfig::default()
        };
        let player = PlayerState::new(config);
        player.play_list(queue(&["a", "b"]), 0).unwrap();
        let policy = TrackEndPolicy::from_config(player.config());

        assert_eq!(policy.on_track_ended(&player), TrackEndOutcome::Stopped);
        assert_eq!(player.snapshot().current_episode_index, 0);
    }

    #[test]
    fn driver_reads_current_url() {
        let player = PlayerState::default();
        assert_eq!(now_playing_url(&player), Err(PlayerError::EmptyQueue));

        player.play_list(queue(&["a", "b"]), 1).unwrap();
        assert_eq!(
            now_playing_url(&player).unwrap(),
            "https://cdn.example.com/b.mp3"
        );
    }
}

#[test]
fn snapshot_serializes_derived_fields() {
    let player = player_at(&["a", "b"], 1);

    let json = serde_json::to_value(player.snapshot()).unwrap();

    assert_eq!(json["current_episode_index"], 1);
    assert_eq!(json["has_previous"], true);
    assert_eq!(json["has_next"], false);
    assert_eq!(json["episode_list"][0]["title"], "a");
}
