//! State holder: owns feature state, applies intents, notifies subscribers.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::reducer::Reducer;

type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

/// Owns one feature's state and provides the only legal mutation path.
///
/// `apply` runs the reducer and re-emits the updated snapshot to every
/// subscriber synchronously, before it returns. Subscribers must not call
/// back into `apply` on the same store.
pub struct Store<R: Reducer> {
    state: Mutex<R::State>,
    subscribers: Mutex<Vec<Subscriber<R::State>>>,
    applied: AtomicU64,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Arc<Self> {
        Self::with_state(R::State::default())
    }

    pub fn with_state(initial: R::State) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(initial),
            subscribers: Mutex::new(Vec::new()),
            applied: AtomicU64::new(0),
        })
    }

    /// Run the reducer on `intent` and notify subscribers with the result.
    pub fn apply(&self, intent: R::Intent) {
        let snapshot = {
            let mut state = self.state.lock();
            let next = R::reduce(std::mem::take(&mut *state), intent);
            *state = next;
            state.clone()
        };
        self.applied.fetch_add(1, Ordering::Relaxed);
        for subscriber in self.subscribers.lock().iter_mut() {
            subscriber(&snapshot);
        }
    }

    /// Latest snapshot, no side effects.
    pub fn current(&self) -> R::State {
        self.state.lock().clone()
    }

    /// Register a synchronous observer of every applied intent's result.
    pub fn subscribe(&self, subscriber: impl FnMut(&R::State) + Send + 'static) {
        self.subscribers.lock().push(Box::new(subscriber));
    }

    /// Number of intents applied since construction.
    pub fn applied(&self) -> u64 {
        self.applied.load(Ordering::Relaxed)
    }
}
