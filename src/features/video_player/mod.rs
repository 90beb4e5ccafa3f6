//! Day 11 — custom video-player control bar. Toggle, skip buttons with
//! skip attributes, volume and rate sliders, and a scrubbable progress
//! bar, all driving a media transport that echoes its position back.

mod intent;
mod reducer;
mod state;

pub use intent::VideoPlayerIntent;
pub use reducer::VideoPlayerReducer;
pub use state::{VideoPlayerState, RATE_RANGE, VOLUME_RANGE};

use std::sync::Arc;

use crate::flow::{Composer, EventPayload, Lifecycle, Phase, RawEvent, Source, Store};
use crate::platform::MediaElement;

/// The control bar's interactive elements, one source per element group.
pub struct VideoControls {
    pub toggle: Arc<Source>,
    pub skips: Arc<Source>,
    pub sliders: Arc<Source>,
    pub progress: Arc<Source>,
}

impl VideoControls {
    pub fn new() -> Self {
        Self {
            toggle: Source::new("toggle-button"),
            skips: Source::new("skip-buttons"),
            sliders: Source::new("range-sliders"),
            progress: Source::new("progress-bar"),
        }
    }
}

impl Default for VideoControls {
    fn default() -> Self {
        Self::new()
    }
}

pub struct VideoPlayer {
    media: Arc<MediaElement>,
    controls: VideoControls,
    store: Arc<Store<VideoPlayerReducer>>,
    lifecycle: Lifecycle,
}

impl VideoPlayer {
    pub fn new(media: Arc<MediaElement>, controls: VideoControls) -> Self {
        let store = Store::with_state(VideoPlayerState::with_duration(media.duration()));
        Self {
            media,
            controls,
            store,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn start(&mut self) {
        let composer = Composer::new()
            .bind(&self.controls.toggle, "click", |_| {
                Some(VideoPlayerIntent::TogglePlay)
            })
            .bind(&self.controls.skips, "click", |raw| {
                Some(VideoPlayerIntent::Skip {
                    seconds: skip_seconds(raw),
                })
            })
            .bind(&self.controls.sliders, "change", slider_intent)
            .bind(&self.controls.progress, "scrub", |raw| {
                raw.payload
                    .as_number()
                    .map(|ratio| VideoPlayerIntent::Scrub { ratio })
            })
            .bind(self.media.events(), "timeupdate", |raw| {
                raw.payload
                    .as_number()
                    .map(|position| VideoPlayerIntent::SyncPosition { position })
            })
            .bind(self.media.events(), "play", |_| {
                Some(VideoPlayerIntent::PlayState { playing: true })
            })
            .bind(self.media.events(), "pause", |_| {
                Some(VideoPlayerIntent::PlayState { playing: false })
            })
            .bind(self.media.events(), "ended", |_| Some(VideoPlayerIntent::Ended));

        let store = Arc::clone(&self.store);
        let media = Arc::clone(&self.media);
        self.lifecycle.start(move || {
            composer.attach(move |intent| {
                store.apply(intent.clone());
                drive_media(&media, &intent);
            })
        });
    }

    pub fn stop(&mut self) {
        self.lifecycle.stop();
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn state(&self) -> VideoPlayerState {
        self.store.current()
    }

    pub fn store(&self) -> &Arc<Store<VideoPlayerReducer>> {
        &self.store
    }

    pub fn controls(&self) -> &VideoControls {
        &self.controls
    }

    pub fn media(&self) -> &Arc<MediaElement> {
        &self.media
    }
}

/// Seconds from a skip button's attribute payload. Malformed attribute
/// text falls back to zero, a no-op skip.
fn skip_seconds(raw: &RawEvent) -> f64 {
    match &raw.payload {
        EventPayload::Attr(value) => value.parse().unwrap_or(0.0),
        EventPayload::Number(value) => *value,
        _ => 0.0,
    }
}

fn slider_intent(raw: &RawEvent) -> Option<VideoPlayerIntent> {
    match &raw.payload {
        EventPayload::Control { name, value } if name == "volume" => {
            Some(VideoPlayerIntent::SetVolume { value: *value })
        }
        EventPayload::Control { name, value } if name == "rate" => {
            Some(VideoPlayerIntent::SetRate { value: *value })
        }
        _ => None,
    }
}

/// Forward a control intent to the media element after it has been applied
/// to the store. Sync intents originate from the element and are not
/// echoed back.
fn drive_media(media: &MediaElement, intent: &VideoPlayerIntent) {
    match intent {
        VideoPlayerIntent::TogglePlay => media.toggle(),
        VideoPlayerIntent::Skip { seconds } => media.skip(*seconds),
        VideoPlayerIntent::SetVolume { value } => media.set_volume(*value),
        VideoPlayerIntent::SetRate { value } => media.set_rate(*value),
        VideoPlayerIntent::Scrub { ratio } => media.scrub(*ratio),
        VideoPlayerIntent::SyncPosition { .. }
        | VideoPlayerIntent::PlayState { .. }
        | VideoPlayerIntent::Ended => {}
    }
}
