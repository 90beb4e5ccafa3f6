//! Simulated media element: a transport clock advanced by the UI tick.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

use crate::flow::{EventPayload, Source};

/// Media transport with play/pause, seeking, volume and playback rate.
///
/// Emits `play`, `pause`, `timeupdate` (position payload) and `ended`
/// through its event source. Position is clamped to `[0, duration]` and
/// playback pauses at the end of the media.
pub struct MediaElement {
    events: Arc<Source>,
    inner: Mutex<Transport>,
}

struct Transport {
    duration: f64,
    position: f64,
    volume: f64,
    rate: f64,
    paused: bool,
}

impl MediaElement {
    pub fn new(duration: f64) -> Self {
        Self {
            events: Source::new("media"),
            inner: Mutex::new(Transport {
                duration: duration.max(0.0),
                position: 0.0,
                volume: 1.0,
                rate: 1.0,
                paused: true,
            }),
        }
    }

    pub fn events(&self) -> &Arc<Source> {
        &self.events
    }

    pub fn toggle(&self) {
        let paused = {
            let mut transport = self.inner.lock();
            transport.paused = !transport.paused;
            transport.paused
        };
        if paused {
            self.events.emit("pause", EventPayload::Empty);
        } else {
            self.events.emit("play", EventPayload::Empty);
        }
    }

    pub fn skip(&self, seconds: f64) {
        let position = {
            let mut transport = self.inner.lock();
            transport.position = (transport.position + seconds).clamp(0.0, transport.duration);
            transport.position
        };
        trace!(seconds, position, "media skip");
        self.events.emit("timeupdate", EventPayload::Number(position));
    }

    /// Seek to a fraction of the duration.
    pub fn scrub(&self, ratio: f64) {
        let position = {
            let mut transport = self.inner.lock();
            transport.position = ratio.clamp(0.0, 1.0) * transport.duration;
            transport.position
        };
        self.events.emit("timeupdate", EventPayload::Number(position));
    }

    pub fn set_volume(&self, value: f64) {
        self.inner.lock().volume = value.clamp(0.0, 1.0);
    }

    pub fn set_rate(&self, value: f64) {
        self.inner.lock().rate = value.clamp(0.5, 2.0);
    }

    /// Advance the clock by `dt` seconds of wall time.
    ///
    /// Emits `timeupdate` while playing, then `ended` and `pause` once the
    /// position reaches the end of the media.
    pub fn tick(&self, dt: f64) {
        let (position, at_end) = {
            let mut transport = self.inner.lock();
            if transport.paused {
                return;
            }
            transport.position = (transport.position + dt * transport.rate).min(transport.duration);
            let at_end = transport.duration > 0.0 && transport.position >= transport.duration;
            if at_end {
                transport.paused = true;
            }
            (transport.position, at_end)
        };
        self.events.emit("timeupdate", EventPayload::Number(position));
        if at_end {
            self.events.emit("ended", EventPayload::Empty);
            self.events.emit("pause", EventPayload::Empty);
        }
    }

    pub fn duration(&self) -> f64 {
        self.inner.lock().duration
    }

    pub fn position(&self) -> f64 {
        self.inner.lock().position
    }

    pub fn volume(&self) -> f64 {
        self.inner.lock().volume
    }

    pub fn rate(&self) -> f64 {
        self.inner.lock().rate
    }

    pub fn is_paused(&self) -> bool {
        self.inner.lock().paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused_at_zero() {
        let media = MediaElement::new(100.0);
        assert!(media.is_paused());
        assert_eq!(media.position(), 0.0);
        assert_eq!(media.duration(), 100.0);
    }

    #[test]
    fn skip_clamps_to_bounds() {
        let media = MediaElement::new(100.0);
        media.skip(-10.0);
        assert_eq!(media.position(), 0.0);
        media.skip(250.0);
        assert_eq!(media.position(), 100.0);
    }

    #[test]
    fn tick_advances_only_while_playing() {
        let media = MediaElement::new(100.0);
        media.tick(1.0);
        assert_eq!(media.position(), 0.0);

        media.toggle();
        media.tick(1.0);
        assert_eq!(media.position(), 1.0);
    }

    #[test]
    fn rate_scales_the_clock() {
        let media = MediaElement::new(100.0);
        media.set_rate(2.0);
        media.toggle();
        media.tick(1.0);
        assert_eq!(media.position(), 2.0);
    }

    #[test]
    fn pauses_and_emits_ended_at_the_end() {
        let media = MediaElement::new(3.0);
        let ended = Arc::new(parking_lot::Mutex::new(false));
        let seen = Arc::clone(&ended);
        let _binding = {
            let events = Arc::clone(media.events());
            crate::flow::Composer::<TestIntent>::new()
                .bind(&events, "ended", move |_| Some(TestIntent))
                .attach(move |_| *seen.lock() = true)
        };

        media.toggle();
        media.tick(5.0);
        assert!(media.is_paused());
        assert_eq!(media.position(), 3.0);
        assert!(*ended.lock());
    }

    #[derive(Debug)]
    struct TestIntent;
    impl crate::flow::Intent for TestIntent {}

    #[test]
    fn volume_and_rate_clamp() {
        let media = MediaElement::new(10.0);
        media.set_volume(5.0);
        assert_eq!(media.volume(), 1.0);
        media.set_volume(-1.0);
        assert_eq!(media.volume(), 0.0);
        media.set_rate(9.0);
        assert_eq!(media.rate(), 2.0);
        media.set_rate(0.0);
        assert_eq!(media.rate(), 0.5);
    }
}
