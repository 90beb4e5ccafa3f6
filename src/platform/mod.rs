//! Simulated platform services.
//!
//! Stand-ins for the browser APIs the demos were written against: a media
//! element, a speech synthesizer, and a speech recognizer. Each owns a
//! [`crate::flow::Source`] and emits the same event vocabulary the real
//! platform would; all of them advance on the terminal event loop's tick.

mod media;
mod speech;

pub use media::MediaElement;
pub use speech::{Recognizer, Synthesizer};
