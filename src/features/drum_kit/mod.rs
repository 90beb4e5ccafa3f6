//! Day 1 — drum kit. Key strikes light pads and count hits; the highlight
//! decays when the transition-end event arrives.

mod intent;
mod reducer;
mod state;

pub use intent::DrumKitIntent;
pub use reducer::DrumKitReducer;
pub use state::{DrumKitState, Pad};

use std::sync::Arc;

use crate::flow::{Composer, Lifecycle, Phase, Source, Store};

pub struct DrumKit {
    keyboard: Arc<Source>,
    store: Arc<Store<DrumKitReducer>>,
    lifecycle: Lifecycle,
}

impl DrumKit {
    pub fn new(keyboard: Arc<Source>) -> Self {
        Self {
            keyboard,
            store: Store::new(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn start(&mut self) {
        let composer = Composer::new()
            .bind(&self.keyboard, "keydown", |raw| {
                raw.payload.as_key().map(|key| DrumKitIntent::Strike {
                    key: key.to_ascii_lowercase(),
                })
            })
            .bind(&self.keyboard, "transitionend", |raw| {
                raw.payload.as_key().map(|key| DrumKitIntent::Decay { key })
            });
        let store = Arc::clone(&self.store);
        self.lifecycle
            .start(move || composer.attach(move |intent| store.apply(intent)));
    }

    pub fn stop(&mut self) {
        self.lifecycle.stop();
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn state(&self) -> DrumKitState {
        self.store.current()
    }

    pub fn store(&self) -> &Arc<Store<DrumKitReducer>> {
        &self.store
    }
}
