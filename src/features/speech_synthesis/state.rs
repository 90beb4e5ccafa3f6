use crate::flow::FeatureState;

/// Valid utterance rate range (mirrors the rate slider).
pub const RATE_RANGE: (f64, f64) = (0.0, 3.0);

/// Valid utterance pitch range (mirrors the pitch slider).
pub const PITCH_RANGE: (f64, f64) = (0.0, 2.0);

/// Utterance parameters plus live speaking progress.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSynthesisState {
    pub text: String,
    pub rate: f64,
    pub pitch: f64,
    /// Index into `voices`.
    pub voice: usize,
    pub voices: Vec<String>,
    pub speaking: bool,
    /// Words spoken so far in the current utterance.
    pub spoken_words: usize,
}

impl Default for SpeechSynthesisState {
    fn default() -> Self {
        Self {
            text: "Hello! I love making noise in the terminal.".to_string(),
            rate: 1.0,
            pitch: 1.0,
            voice: 0,
            voices: Vec::new(),
            speaking: false,
            spoken_words: 0,
        }
    }
}

impl FeatureState for SpeechSynthesisState {}

impl SpeechSynthesisState {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn voice_name(&self) -> Option<&str> {
        self.voices.get(self.voice).map(String::as_str)
    }
}
