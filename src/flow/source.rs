//! Event sources: named targets with synchronous listener dispatch.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Payload carried by a raw platform event.
///
/// Payloads are opaque to the source; only the mapping functions in a
/// [`super::Composer`] interpret them. `Attr` carries raw attribute text
/// (the `data-skip="abc"` case) which may fail to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Empty,
    /// A pressed key.
    Key(char),
    /// A numeric value (slider position, scroll offset, media position).
    Number(f64),
    /// Free text (a transcript, an utterance).
    Text(String),
    /// Raw attribute text attached to the originating element.
    Attr(String),
    /// A named form control and its numeric value.
    Control { name: String, value: f64 },
}

impl EventPayload {
    pub fn as_key(&self) -> Option<char> {
        match self {
            EventPayload::Key(key) => Some(*key),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            EventPayload::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            EventPayload::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_attr(&self) -> Option<&str> {
        match self {
            EventPayload::Attr(value) => Some(value),
            _ => None,
        }
    }
}

/// One raw platform event: an opaque (name, payload) pair.
#[derive(Debug, Clone)]
pub struct RawEvent {
    pub name: &'static str,
    pub payload: EventPayload,
}

impl RawEvent {
    pub fn new(name: &'static str, payload: EventPayload) -> Self {
        Self { name, payload }
    }
}

type ListenerFn = Box<dyn FnMut(&RawEvent) + Send>;

struct Listener {
    id: u64,
    event: &'static str,
    callback: ListenerFn,
}

/// A named event target.
///
/// Listeners are registered per event name and run synchronously, in
/// registration order, on the emitting thread. Listeners must not emit on
/// the source they are bound to; everything downstream of a listener goes
/// through a [`super::Store`] or a different source.
pub struct Source {
    name: &'static str,
    inner: Mutex<SourceInner>,
}

struct SourceInner {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl Source {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            inner: Mutex::new(SourceInner {
                next_id: 0,
                listeners: Vec::new(),
            }),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Dispatch `event` to every listener registered for it. Listeners run
    /// before `emit` returns; an event emitted after a listener's binding
    /// has been released never reaches it.
    pub fn emit(&self, event: &'static str, payload: EventPayload) {
        let raw = RawEvent::new(event, payload);
        let mut inner = self.inner.lock();
        for listener in inner.listeners.iter_mut() {
            if listener.event == event {
                (listener.callback)(&raw);
            }
        }
    }

    /// Number of live listeners across all event names.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    pub(crate) fn add_listener(self: &Arc<Self>, event: &'static str, callback: ListenerFn) -> Binding {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push(Listener {
            id,
            event,
            callback,
        });
        Binding {
            source: Arc::downgrade(self),
            id,
        }
    }

    fn remove_listener(&self, id: u64) {
        self.inner.lock().listeners.retain(|listener| listener.id != id);
    }
}

/// Opaque handle for one active event binding.
///
/// The underlying listener is detached exactly once, when the handle is
/// released or dropped. A source that outlives its bindings is unaffected;
/// a binding that outlives its source detaches nothing.
#[derive(Debug)]
pub struct Binding {
    source: Weak<Source>,
    id: u64,
}

impl Binding {
    /// Detach the underlying listener. Equivalent to dropping the handle.
    pub fn release(self) {}
}

impl Drop for Binding {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source.remove_listener(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn emit_reaches_only_matching_listeners() {
        let source = Source::new("pad");
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let _binding = source.add_listener(
            "keydown",
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::Relaxed);
            }),
        );

        source.emit("keydown", EventPayload::Key('a'));
        source.emit("keyup", EventPayload::Key('a'));
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn dropping_binding_removes_listener() {
        let source = Source::new("pad");
        let binding = source.add_listener("keydown", Box::new(|_| {}));
        assert_eq!(source.listener_count(), 1);
        drop(binding);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let source = Source::new("pad");
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&order);
        let _a = source.add_listener(
            "keydown",
            Box::new(move |_| first.lock().push("first")),
        );
        let second = Arc::clone(&order);
        let _b = source.add_listener(
            "keydown",
            Box::new(move |_| second.lock().push("second")),
        );

        source.emit("keydown", EventPayload::Empty);
        assert_eq!(*order.lock(), vec!["first", "second"]);
    }

    #[test]
    fn release_after_source_dropped_is_harmless() {
        let source = Source::new("pad");
        let binding = source.add_listener("keydown", Box::new(|_| {}));
        drop(source);
        binding.release();
    }
}
