use crate::flow::FeatureState;

/// Valid volume range.
pub const VOLUME_RANGE: (f64, f64) = (0.0, 1.0);

/// Valid playback-rate range.
pub const RATE_RANGE: (f64, f64) = (0.5, 2.0);

/// Transport state for the custom control bar.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoPlayerState {
    pub playing: bool,
    pub position: f64,
    pub duration: f64,
    pub volume: f64,
    pub rate: f64,
    pub ended: bool,
}

impl Default for VideoPlayerState {
    fn default() -> Self {
        Self {
            playing: false,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            rate: 1.0,
            ended: false,
        }
    }
}

impl FeatureState for VideoPlayerState {}

impl VideoPlayerState {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            ..Self::default()
        }
    }

    /// Fraction of the media played, in `[0, 1]`.
    pub fn progress_ratio(&self) -> f64 {
        if self.duration <= 0.0 {
            0.0
        } else {
            (self.position / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Toggle-button glyph for the current transport state.
    pub fn icon(&self) -> &'static str {
        if self.playing {
            "❚❚"
        } else {
            "►"
        }
    }
}
