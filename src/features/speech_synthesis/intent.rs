use crate::flow::Intent;

/// Intents dispatched to the speech synthesis reducer.
#[derive(Debug, Clone)]
pub enum SpeechSynthesisIntent {
    /// The utterance textarea was committed.
    SetText { text: String },

    SetRate { value: f64 },

    SetPitch { value: f64 },

    SelectVoice { index: usize },

    /// Speak/stop button. `restart` re-speaks the utterance from the top;
    /// without it the current utterance is cancelled.
    Toggle { restart: bool },

    /// The synthesizer began an utterance.
    SpeakingStarted,

    /// The synthesizer crossed a word boundary.
    WordSpoken { index: usize },

    /// The utterance finished or was cancelled.
    SpeakingEnded,
}

impl Intent for SpeechSynthesisIntent {}
