//! The five demos. Each feature owns its store, composer wiring and
//! lifecycle; construction is an explicit composition root — the caller
//! builds the platform sources and hands them in.

pub mod drum_kit;
pub mod speech_detection;
pub mod speech_synthesis;
pub mod sticky_nav;
pub mod video_player;
