use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use futures::Stream;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument, warn};

use super::{
    Episode, PlayerError, PlayerSnapshot,
    observers::{Observers, Subscription},
};
use crate::{config::PlayerConfig, services::common::Property};

/// Owner of the playback state.
///
/// Created once at startup and shared by reference (usually behind an
/// `Arc`). The queue, position and flags can only change through the
/// methods below. Every change is published as a new [`PlayerSnapshot`]:
/// synchronous subscribers receive every snapshot in order, and
/// [`PlayerState::watch`] streams see the latest snapshot.
pub struct PlayerState {
    snapshot: Property<PlayerSnapshot>,
    observers: Arc<Observers>,
    rng: Mutex<SmallRng>,
    config: PlayerConfig,
}

impl PlayerState {
    /// Create an empty player: no episodes, index 0, every flag off.
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Create an empty player whose shuffle order is reproducible.
    pub fn with_seed(config: PlayerConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: PlayerConfig, rng: SmallRng) -> Self {
        Self {
            snapshot: Property::new(PlayerSnapshot::default()),
            observers: Arc::new(Observers::default()),
            rng: Mutex::new(rng),
            config,
        }
    }

    /// Replace the queue with this single episode and start playing it.
    #[instrument(skip_all, fields(title = %episode.title))]
    pub fn play(&self, episode: Episode) {
        info!("Playing single episode");
        self.apply(|state| {
            state.episode_list = Arc::new(vec![episode]);
            state.current_episode_index = 0;
            state.is_playing = true;
        });
    }

    /// Replace the queue with `list` and start playing at `index`.
    ///
    /// An empty list is accepted with index 0 only.
    ///
    /// # Errors
    /// Returns `PlayerError::IndexOutOfRange` when `index` does not point into
    /// `list`. The state is left untouched in that case.
    #[instrument(skip(self, list), fields(len = list.len()))]
    pub fn play_list(&self, list: Vec<Episode>, index: usize) -> Result<(), PlayerError> {
        let len = list.len();
        let in_range = index < len || (len == 0 && index == 0);
        if !in_range {
            warn!("Rejected queue with out-of-range start index");
            return Err(PlayerError::IndexOutOfRange { index, len });
        }

        info!("Playing queue");
        self.apply(|state| {
            state.episode_list = Arc::new(list);
            state.current_episode_index = index;
            state.is_playing = true;
        });
        Ok(())
    }

    /// Flip the playing flag.
    pub fn toggle_play(&self) {
        self.apply(|state| state.is_playing = !state.is_playing);
    }

    /// Flip the looping flag.
    pub fn toggle_loop(&self) {
        self.apply(|state| state.is_looping = !state.is_looping);
    }

    /// Flip the shuffling flag.
    pub fn toggle_shuffle(&self) {
        self.apply(|state| state.is_shuffling = !state.is_shuffling);
    }

    /// Set the playing flag directly.
    ///
    /// Used by the audio driver to report that playback ended or failed.
    pub fn set_playing_state(&self, playing: bool) {
        self.apply(|state| state.is_playing = playing);
    }

    /// Empty the queue and reset the position.
    ///
    /// Playback also stops when `stop_on_clear` is configured. Loop and
    /// shuffle are left as they are.
    #[instrument(skip(self))]
    pub fn clear_player_state(&self) {
        let stop = self.config.stop_on_clear;
        info!("Clearing queue");
        self.apply(|state| {
            state.episode_list = Arc::new(Vec::new());
            state.current_episode_index = 0;
            if stop {
                state.is_playing = false;
            }
        });
    }

    /// Move to the next episode.
    ///
    /// While shuffling, jumps to a uniformly random position in the queue.
    /// Otherwise advances by one if there is a next episode. Does nothing
    /// at the end of the queue or when the queue is empty.
    pub fn play_next(&self) {
        self.apply(|state| {
            let len = state.episode_list.len();
            if len == 0 {
                return;
            }

            if state.is_shuffling {
                state.current_episode_index = self.random_index(len, state.current_episode_index);
            } else if state.has_next() {
                state.current_episode_index += 1;
            }
        });
    }

    /// Move to the previous episode, if there is one.
    pub fn play_previous(&self) {
        self.apply(|state| {
            if state.has_previous() {
                state.current_episode_index -= 1;
            }
        });
    }

    /// Current state.
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.snapshot.get()
    }

    /// Whether there is an episode before the current one.
    pub fn has_previous(&self) -> bool {
        self.snapshot().has_previous()
    }

    /// Whether `play_next` can move.
    pub fn has_next(&self) -> bool {
        self.snapshot().has_next()
    }

    /// The episode at the current position, if any.
    pub fn current_episode(&self) -> Option<Episode> {
        self.snapshot().current_episode().cloned()
    }

    /// Register a callback that receives every new snapshot.
    ///
    /// The callback runs synchronously after each state change, in
    /// registration order. Operations that leave the state unchanged do
    /// not notify.
    ///
    /// A callback may mutate the player. The resulting snapshot is delivered
    /// to every subscriber once the current one has reached all of them, so
    /// the last snapshot a subscriber sees is always the current state.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PlayerSnapshot) + Send + Sync + 'static,
    {
        self.observers.subscribe(Arc::new(callback))
    }

    /// Number of registered synchronous subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Watch snapshots as an async stream.
    ///
    /// Yields the current snapshot immediately, then the latest snapshot
    /// after changes. Intermediate snapshots may be skipped if the consumer
    /// falls behind.
    pub fn watch(&self) -> impl Stream<Item = PlayerSnapshot> + Send + use<> {
        self.snapshot.watch()
    }

    /// Policies this player was created with.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    fn apply<F>(&self, mutate: F)
    where
        F: FnOnce(&mut PlayerSnapshot),
    {
        self.observers.publish(|| {
            let snapshot = self.snapshot.update(mutate)?;
            debug!(
                index = snapshot.current_episode_index,
                len = snapshot.episode_list.len(),
                playing = snapshot.is_playing,
                looping = snapshot.is_looping,
                shuffling = snapshot.is_shuffling,
                "Player state changed"
            );
            Some(snapshot)
        });
    }

    fn random_index(&self, len: usize, current: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        if self.config.shuffle_avoids_repeat && len > 1 {
            let pick = rng.random_range(0..len - 1);
            if pick >= current { pick + 1 } else { pick }
        } else {
            rng.random_range(0..len)
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl fmt::Debug for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerState")
            .field("snapshot", &self.snapshot.get())
            .field("subscribers", &self.observers.len())
            .field("config", &self.config)
            .finish()
    }
}
