use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI tick interval in milliseconds. Drives the media clock, speech
    /// pacing and pad decay.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Demo shown at startup.
    #[serde(default = "default_start_demo")]
    pub start_demo: String,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub nav: NavConfig,
}

/// Settings for the simulated media element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Length of the demo clip in seconds.
    #[serde(default = "default_media_duration")]
    pub duration_seconds: f64,
}

/// Initial utterance parameters for the speech synthesis demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_text")]
    pub default_text: String,
    #[serde(default = "default_speech_rate")]
    pub rate: f64,
    #[serde(default = "default_speech_pitch")]
    pub pitch: f64,
}

/// Page geometry for the sticky nav demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Hero header height in rows; the nav pins once scrolled past it.
    #[serde(default = "default_header_rows")]
    pub header_rows: u16,
    /// Nav bar height in rows.
    #[serde(default = "default_nav_rows")]
    pub nav_rows: u16,
}

fn default_tick_ms() -> u64 {
    100
}

fn default_start_demo() -> String {
    "drum-kit".to_string()
}

fn default_media_duration() -> f64 {
    154.0
}

fn default_speech_text() -> String {
    "Hello! I love making noise in the terminal.".to_string()
}

fn default_speech_rate() -> f64 {
    1.0
}

fn default_speech_pitch() -> f64 {
    1.0
}

fn default_header_rows() -> u16 {
    12
}

fn default_nav_rows() -> u16 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            start_demo: default_start_demo(),
            media: MediaConfig::default(),
            speech: SpeechConfig::default(),
            nav: NavConfig::default(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            duration_seconds: default_media_duration(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            default_text: default_speech_text(),
            rate: default_speech_rate(),
            pitch: default_speech_pitch(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_rows: default_header_rows(),
            nav_rows: default_nav_rows(),
        }
    }
}
