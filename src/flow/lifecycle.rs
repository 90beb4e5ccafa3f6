//! Lifecycle manager: bound-scope acquisition and release of bindings.

use tracing::debug;

use super::source::Binding;

/// Lifecycle phases of one feature instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Active,
    Stopped,
}

/// Owns every event binding acquired for one feature instance.
///
/// One-shot: Idle → Active on `start`, Active → Stopped on `stop`, and
/// Stopped is terminal. A stopped feature needs a fresh instance to run
/// again.
pub struct Lifecycle {
    phase: Phase,
    bindings: Vec<Binding>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            bindings: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Acquire bindings via `acquire` and become Active.
    ///
    /// No-op while already Active (never duplicates listeners) and after
    /// Stopped.
    pub fn start(&mut self, acquire: impl FnOnce() -> Vec<Binding>) {
        match self.phase {
            Phase::Idle => {
                self.bindings = acquire();
                self.phase = Phase::Active;
                debug!(bindings = self.bindings.len(), "lifecycle started");
            }
            Phase::Active | Phase::Stopped => {}
        }
    }

    /// Release every binding acquired by the last `start`.
    ///
    /// Once `stop` returns, no bound platform event can mutate state.
    /// Idempotent; stopping an Idle instance closes it for good with
    /// nothing to release.
    pub fn stop(&mut self) {
        if self.phase == Phase::Stopped {
            return;
        }
        let released = self.bindings.len();
        for binding in self.bindings.drain(..) {
            binding.release();
        }
        self.phase = Phase::Stopped;
        debug!(released, "lifecycle stopped");
    }

    /// Number of live bindings; zero unless Active.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{EventPayload, Source};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_binding(source: &Arc<Source>, hits: &Arc<AtomicUsize>) -> Binding {
        let hits = Arc::clone(hits);
        source.add_listener(
            "ping",
            Box::new(move |_| {
                hits.fetch_add(1, Ordering::Relaxed);
            }),
        )
    }

    #[test]
    fn start_acquires_and_stop_releases() {
        let source = Source::new("test");
        let hits = Arc::new(AtomicUsize::new(0));
        let mut lifecycle = Lifecycle::new();

        lifecycle.start(|| vec![counting_binding(&source, &hits)]);
        assert_eq!(lifecycle.phase(), Phase::Active);
        assert_eq!(source.listener_count(), 1);

        lifecycle.stop();
        assert_eq!(lifecycle.phase(), Phase::Stopped);
        assert_eq!(source.listener_count(), 0);
        assert_eq!(lifecycle.binding_count(), 0);

        source.emit("ping", EventPayload::Empty);
        assert_eq!(hits.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn double_start_does_not_duplicate_bindings() {
        let source = Source::new("test");
        let hits = Arc::new(AtomicUsize::new(0));
        let mut lifecycle = Lifecycle::new();

        lifecycle.start(|| vec![counting_binding(&source, &hits)]);
        lifecycle.start(|| vec![counting_binding(&source, &hits)]);
        assert_eq!(source.listener_count(), 1);

        source.emit("ping", EventPayload::Empty);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn stopped_is_terminal() {
        let source = Source::new("test");
        let hits = Arc::new(AtomicUsize::new(0));
        let mut lifecycle = Lifecycle::new();

        lifecycle.start(|| vec![counting_binding(&source, &hits)]);
        lifecycle.stop();
        lifecycle.stop();
        lifecycle.start(|| vec![counting_binding(&source, &hits)]);

        assert_eq!(lifecycle.phase(), Phase::Stopped);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn stop_from_idle_closes_the_instance() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.stop();
        assert_eq!(lifecycle.phase(), Phase::Stopped);
    }
}
