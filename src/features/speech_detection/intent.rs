use crate::flow::Intent;

/// Intents dispatched to the speech detection reducer.
#[derive(Debug, Clone)]
pub enum SpeechDetectionIntent {
    /// Recognition opened its first session.
    Started,

    /// Interim transcript for the open session.
    Transcript { text: String },

    /// The session closed; its transcript is committed and recognition
    /// restarts.
    SessionEnded,
}

impl Intent for SpeechDetectionIntent {}
