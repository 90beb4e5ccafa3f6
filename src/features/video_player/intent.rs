use crate::flow::Intent;

/// Intents dispatched to the video player reducer.
///
/// The first five originate from the control bar; the rest are echoes from
/// the media element keeping the state in sync with the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoPlayerIntent {
    TogglePlay,

    /// Skip button click; seconds come from the button's skip attribute,
    /// which falls back to zero when malformed.
    Skip { seconds: f64 },

    SetVolume { value: f64 },

    SetRate { value: f64 },

    /// Progress-bar scrub to a fraction of the duration.
    Scrub { ratio: f64 },

    /// `timeupdate` from the media element.
    SyncPosition { position: f64 },

    /// `play`/`pause` from the media element.
    PlayState { playing: bool },

    /// The media reached its end.
    Ended,
}

impl Intent for VideoPlayerIntent {}
