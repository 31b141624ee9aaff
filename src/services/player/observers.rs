use std::{
    collections::VecDeque,
    fmt,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError, Weak,
        atomic::{AtomicU64, Ordering},
    },
};

use tracing::trace;

use super::PlayerSnapshot;

type Callback = Arc<dyn Fn(&PlayerSnapshot) + Send + Sync>;

/// Registry of synchronous snapshot subscribers.
///
/// Callbacks run in registration order. Delivery is serialized: while one
/// call is dispatching, further snapshots (from a callback mutating the
/// player, or from another thread) are queued and handed out by that call
/// after the current snapshot has reached every subscriber. Each subscriber
/// therefore sees every snapshot in publication order, and the last one it
/// sees is the current state.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: AtomicU64,
    callbacks: Mutex<Vec<(u64, Callback)>>,
    dispatch: Mutex<Dispatch>,
}

#[derive(Default)]
struct Dispatch {
    pending: VecDeque<PlayerSnapshot>,
    dispatching: bool,
}

impl Observers {
    pub(crate) fn subscribe(self: &Arc<Self>, callback: Callback) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push((id, callback));
        trace!(id, "Registered player subscriber");

        Subscription {
            id,
            observers: Arc::downgrade(self),
        }
    }

    /// Run `produce` and queue the snapshot it returns, if any.
    ///
    /// `produce` runs under the dispatch lock, so snapshots are queued in the
    /// same order as the state changes that produced them. If no other call
    /// is dispatching, this one drains the queue before returning.
    pub(crate) fn publish<F>(&self, produce: F)
    where
        F: FnOnce() -> Option<PlayerSnapshot>,
    {
        {
            let mut dispatch = self.lock_dispatch();
            let Some(snapshot) = produce() else {
                return;
            };
            dispatch.pending.push_back(snapshot);
            if dispatch.dispatching {
                trace!(queued = dispatch.pending.len(), "Queued player snapshot");
                return;
            }
            dispatch.dispatching = true;
        }

        let _reset = ResetOnPanic(self);
        loop {
            let next = {
                let mut dispatch = self.lock_dispatch();
                let next = dispatch.pending.pop_front();
                if next.is_none() {
                    dispatch.dispatching = false;
                }
                next
            };
            match next {
                Some(snapshot) => self.notify(&snapshot),
                None => break,
            }
        }
    }

    fn notify(&self, snapshot: &PlayerSnapshot) {
        // Callbacks may subscribe, unsubscribe or mutate the player; never hold a lock while calling out.
        let callbacks: Vec<Callback> = self.lock().iter().map(|(_, cb)| Arc::clone(cb)).collect();

        trace!(subscribers = callbacks.len(), "Notifying player subscribers");
        for callback in callbacks {
            callback(snapshot);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    fn remove(&self, id: u64) {
        self.lock().retain(|(existing, _)| *existing != id);
        trace!(id, "Removed player subscriber");
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(u64, Callback)>> {
        self.callbacks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_dispatch(&self) -> MutexGuard<'_, Dispatch> {
        self.dispatch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the dispatching flag if a callback panics mid-delivery.
struct ResetOnPanic<'a>(&'a Observers);

impl Drop for ResetOnPanic<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut dispatch = self.0.lock_dispatch();
            dispatch.pending.clear();
            dispatch.dispatching = false;
        }
    }
}

/// Handle for a registered snapshot callback.
///
/// The callback stays registered until this handle is dropped or
/// [`Subscription::unsubscribe`] is called.
#[must_use = "dropping a Subscription unregisters its callback"]
pub struct Subscription {
    id: u64,
    observers: Weak<Observers>,
}

impl Subscription {
    /// Stop receiving snapshots.
    pub fn unsubscribe(self) {}

    /// Keep the callback registered for as long as the player lives.
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            observers.remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
