use crate::flow::FeatureState;

/// Transcript page: committed paragraphs plus the open session's interim
/// text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpeechDetectionState {
    pub committed: Vec<String>,
    pub interim: String,
    /// Completed recognition sessions (each end auto-restarts).
    pub sessions: u32,
    pub listening: bool,
}

impl FeatureState for SpeechDetectionState {}

impl SpeechDetectionState {
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.interim.is_empty()
    }
}
