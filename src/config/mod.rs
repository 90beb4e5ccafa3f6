//! Configuration: a TOML file in the platform config directory, with
//! defaults for every field and validation after parse.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, MediaConfig, NavConfig, SpeechConfig};
