//! Unidirectional event-flow primitives shared by every demo.
//!
//! # Architecture
//!
//! ```text
//! RawEvent ──→ Composer ──→ Intent ──→ Store ──→ snapshot ──→ View
//!     ↑                                                        │
//!     └──────────────── platform / user ──────────────────────┘
//! ```
//!
//! - **Source**: a named event target; listeners run synchronously on emit
//! - **Composer**: maps and merges raw events into a single intent stream
//! - **Store**: owns feature state; intents are the only mutation path
//! - **Lifecycle**: bound-scope acquisition and release of event bindings

mod compose;
mod intent;
mod lifecycle;
mod reducer;
mod source;
mod state;
mod store;

pub use compose::Composer;
pub use intent::Intent;
pub use lifecycle::{Lifecycle, Phase};
pub use reducer::Reducer;
pub use source::{Binding, EventPayload, RawEvent, Source};
pub use state::FeatureState;
pub use store::Store;
