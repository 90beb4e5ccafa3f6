//! Event composer: raw events in, one merged intent stream out.

use std::sync::Arc;

use super::intent::Intent;
use super::source::{Binding, RawEvent, Source};

type MapFn<I> = Arc<dyn Fn(&RawEvent) -> Option<I> + Send + Sync>;

struct Triple<I> {
    source: Arc<Source>,
    event: &'static str,
    map: MapFn<I>,
}

/// Converts heterogeneous raw events into typed intents and merges every
/// bound stream into a single dispatcher.
///
/// Mapping functions must be pure. Returning `None` drops the event (an
/// unmapped key, a payload of the wrong shape); malformed-but-mapped values
/// substitute a neutral default instead of failing. Per-source emission
/// order is preserved; cross-source order is whatever order the platform
/// fires events in.
pub struct Composer<I: Intent> {
    triples: Vec<Triple<I>>,
}

impl<I: Intent> Composer<I> {
    pub fn new() -> Self {
        Self {
            triples: Vec::new(),
        }
    }

    /// Add a (source, event name, mapping function) triple.
    pub fn bind(
        mut self,
        source: &Arc<Source>,
        event: &'static str,
        map: impl Fn(&RawEvent) -> Option<I> + Send + Sync + 'static,
    ) -> Self {
        self.triples.push(Triple {
            source: Arc::clone(source),
            event,
            map: Arc::new(map),
        });
        self
    }

    /// Number of bound triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Attach one listener per triple, all feeding `dispatch`, and return
    /// the acquired bindings. All side effects happen inside `dispatch`;
    /// the mapping step stays pure.
    pub fn attach(&self, dispatch: impl Fn(I) + Send + Sync + 'static) -> Vec<Binding> {
        let dispatch = Arc::new(dispatch);
        self.triples
            .iter()
            .map(|triple| {
                let map = Arc::clone(&triple.map);
                let dispatch = Arc::clone(&dispatch);
                triple.source.add_listener(
                    triple.event,
                    Box::new(move |raw| {
                        if let Some(intent) = map(raw) {
                            dispatch(intent);
                        }
                    }),
                )
            })
            .collect()
    }
}

impl<I: Intent> Default for Composer<I> {
    fn default() -> Self {
        Self::new()
    }
}
