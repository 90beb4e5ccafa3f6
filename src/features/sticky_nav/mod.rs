//! Day 24 — sticky nav. Scrolling past the hero header pins the nav to
//! the top of the viewport and pads the page where it used to sit.

mod intent;
mod reducer;
mod state;

pub use intent::StickyNavIntent;
pub use reducer::StickyNavReducer;
pub use state::StickyNavState;

use std::sync::Arc;

use crate::flow::{Composer, Lifecycle, Phase, Source, Store};

pub struct StickyNav {
    window: Arc<Source>,
    store: Arc<Store<StickyNavReducer>>,
    lifecycle: Lifecycle,
}

impl StickyNav {
    pub fn new(window: Arc<Source>, nav_top: u16, nav_height: u16) -> Self {
        Self {
            window,
            store: Store::with_state(StickyNavState::with_geometry(nav_top, nav_height)),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn start(&mut self) {
        let composer = Composer::new().bind(&self.window, "scroll", |raw| {
            raw.payload
                .as_number()
                .map(|offset| StickyNavIntent::Scrolled { offset })
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

    pub fn state(&self) -> StickyNavState {
        self.store.current()
    }

    pub fn store(&self) -> &Arc<Store<StickyNavReducer>> {
        &self.store
    }
}
