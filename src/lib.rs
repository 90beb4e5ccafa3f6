//! demoreel — five day-sized front-end exercises rebuilt for the terminal.
//!
//! Each demo (drum kit, video-player control bar, speech detection, speech
//! synthesis, sticky navigation header) is an independent feature built on
//! the same unidirectional flow: platform events are composed into typed
//! intents, intents are reduced into feature state, and the view renders
//! state snapshots.

pub mod config;
pub mod features;
pub mod flow;
pub mod logging;
pub mod platform;
pub mod ui;
