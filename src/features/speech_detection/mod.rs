//! Day 20 — speech detection. Recognition results stream into an interim
//! transcript; when a session ends its paragraph is committed and a new
//! session opens immediately.

mod intent;
mod reducer;
mod state;

pub use intent::SpeechDetectionIntent;
pub use reducer::SpeechDetectionReducer;
pub use state::SpeechDetectionState;

use std::sync::Arc;

use crate::flow::{Composer, Lifecycle, Phase, Store};
use crate::platform::Recognizer;

pub struct SpeechDetection {
    recognizer: Arc<Recognizer>,
    store: Arc<Store<SpeechDetectionReducer>>,
    lifecycle: Lifecycle,
}

impl SpeechDetection {
    pub fn new(recognizer: Arc<Recognizer>) -> Self {
        Self {
            recognizer,
            store: Store::new(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn start(&mut self) {
        if self.lifecycle.phase() != Phase::Idle {
            return;
        }
        let composer = Composer::new()
            .bind(self.recognizer.events(), "result", |raw| {
                raw.payload.as_text().map(|text| SpeechDetectionIntent::Transcript {
                    text: text.to_string(),
                })
            })
            .bind(self.recognizer.events(), "end", |_| {
                Some(SpeechDetectionIntent::SessionEnded)
            });

        let store = Arc::clone(&self.store);
        let recognizer = Arc::clone(&self.recognizer);
        self.lifecycle.start(move || {
            composer.attach(move |intent| {
                let restart = matches!(intent, SpeechDetectionIntent::SessionEnded);
                store.apply(intent);
                if restart {
                    recognizer.start();
                }
            })
        });

        self.recognizer.start();
        self.store.apply(SpeechDetectionIntent::Started);
    }

    pub fn stop(&mut self) {
        self.lifecycle.stop();
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn state(&self) -> SpeechDetectionState {
        self.store.current()
    }

    pub fn store(&self) -> &Arc<Store<SpeechDetectionReducer>> {
        &self.store
    }
}
