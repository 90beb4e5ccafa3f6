//! Application state: the five feature instances, the platform services
//! that drive them, and the translation of terminal keys into platform
//! events.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, warn};

use crate::config::Config;
use crate::features::drum_kit::DrumKit;
use crate::features::speech_detection::SpeechDetection;
use crate::features::speech_synthesis::{SpeechSynthesis, SpeechSynthesisState};
use crate::features::sticky_nav::StickyNav;
use crate::features::video_player::{VideoControls, VideoPlayer};
use crate::flow::{EventPayload, Source};
use crate::platform::{Recognizer, Synthesizer};

/// Furthest the sticky nav story page can scroll, in rows.
const MAX_SCROLL: u16 = 60;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Demo {
    DrumKit,
    VideoPlayer,
    SpeechDetection,
    SpeechSynthesis,
    StickyNav,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::DrumKit,
        Demo::VideoPlayer,
        Demo::SpeechDetection,
        Demo::SpeechSynthesis,
        Demo::StickyNav,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Demo::DrumKit => "Drum Kit",
            Demo::VideoPlayer => "Video Player",
            Demo::SpeechDetection => "Speech Detection",
            Demo::SpeechSynthesis => "Speech Synthesis",
            Demo::StickyNav => "Sticky Nav",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Demo::DrumKit => "drum-kit",
            Demo::VideoPlayer => "video-player",
            Demo::SpeechDetection => "speech-detection",
            Demo::SpeechSynthesis => "speech-synthesis",
            Demo::StickyNav => "sticky-nav",
        }
    }

    pub fn from_name(name: &str) -> Option<Demo> {
        Demo::ALL.into_iter().find(|demo| demo.name() == name)
    }

    pub fn index(self) -> usize {
        Demo::ALL
            .iter()
            .position(|demo| *demo == self)
            .unwrap_or(0)
    }

    fn next(self) -> Demo {
        Demo::ALL[(self.index() + 1) % Demo::ALL.len()]
    }

    fn prev(self) -> Demo {
        Demo::ALL[(self.index() + Demo::ALL.len() - 1) % Demo::ALL.len()]
    }
}

pub struct App {
    should_quit: bool,
    demo: Demo,
    tick_seconds: f64,
    // Platform services shared with the features.
    keyboard: Arc<Source>,
    window: Arc<Source>,
    text_panel: Arc<Source>,
    voice_panel: Arc<Source>,
    synth: Arc<Synthesizer>,
    recognizer: Arc<Recognizer>,
    // One instance per demo, all running for the app's lifetime.
    drum_kit: DrumKit,
    video_player: VideoPlayer,
    speech_detection: SpeechDetection,
    speech_synthesis: SpeechSynthesis,
    sticky_nav: StickyNav,
    // View-only editing state; committed into events, never read by reducers.
    utterance_draft: String,
    dictation_word: String,
    scroll_offset: u16,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let keyboard = Source::new("keyboard");
        let window = Source::new("window");
        let text_panel = Source::new("utterance-panel");
        let voice_panel = Source::new("voice-panel");
        let synth = Arc::new(Synthesizer::new());
        let recognizer = Arc::new(Recognizer::new());

        let drum_kit = DrumKit::new(Arc::clone(&keyboard));
        let video_player = VideoPlayer::new(
            Arc::new(crate::platform::MediaElement::new(config.media.duration_seconds)),
            VideoControls::new(),
        );
        let speech_detection = SpeechDetection::new(Arc::clone(&recognizer));
        let speech_synthesis = SpeechSynthesis::with_utterance(
            Arc::clone(&synth),
            Arc::clone(&text_panel),
            Arc::clone(&voice_panel),
            SpeechSynthesisState {
                text: config.speech.default_text.clone(),
                rate: config.speech.rate,
                pitch: config.speech.pitch,
                ..SpeechSynthesisState::default()
            },
        );
        let sticky_nav = StickyNav::new(
            Arc::clone(&window),
            config.nav.header_rows,
            config.nav.nav_rows,
        );

        let demo = Demo::from_name(&config.start_demo).unwrap_or_else(|| {
            warn!(name = %config.start_demo, "unknown start demo, using drum-kit");
            Demo::DrumKit
        });

        Self {
            should_quit: false,
            demo,
            tick_seconds: Duration::from_millis(config.tick_ms).as_secs_f64(),
            keyboard,
            window,
            text_panel,
            voice_panel,
            synth,
            recognizer,
            drum_kit,
            video_player,
            speech_detection,
            speech_synthesis,
            sticky_nav,
            utterance_draft: config.speech.default_text.clone(),
            dictation_word: String::new(),
            scroll_offset: 0,
        }
    }

    /// Start every feature's lifecycle.
    pub fn start(&mut self) {
        self.drum_kit.start();
        self.video_player.start();
        self.speech_detection.start();
        self.speech_synthesis.start();
        self.sticky_nav.start();
        debug!("all features started");
    }

    /// Tear every feature down; no platform event mutates state afterwards.
    pub fn shutdown(&mut self) {
        self.drum_kit.stop();
        self.video_player.stop();
        self.speech_detection.stop();
        self.speech_synthesis.stop();
        self.sticky_nav.stop();
        debug!("all features stopped");
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn demo(&self) -> Demo {
        self.demo
    }

    pub fn on_tick(&mut self) {
        let dt = self.tick_seconds;
        self.video_player.media().tick(dt);
        self.synth.tick(dt);
        // Pad highlights decay one tick after the strike, standing in for
        // the transition-end the page listens to.
        for key in self.drum_kit.state().lit_keys() {
            self.keyboard
                .emit("transitionend", EventPayload::Key(key));
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        debug!(cols, rows, "terminal resized");
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.request_quit();
                return;
            }
            KeyCode::Tab => {
                self.demo = self.demo.next();
                return;
            }
            KeyCode::BackTab => {
                self.demo = self.demo.prev();
                return;
            }
            KeyCode::F(n @ 1..=5) => {
                self.demo = Demo::ALL[usize::from(n) - 1];
                return;
            }
            _ => {}
        }

        match self.demo {
            Demo::DrumKit => self.on_drum_key(key.code),
            Demo::VideoPlayer => self.on_video_key(key.code),
            Demo::SpeechDetection => self.on_detection_key(key.code),
            Demo::SpeechSynthesis => self.on_synthesis_key(key.code),
            Demo::StickyNav => self.on_nav_key(key.code),
        }
    }

    fn on_drum_key(&mut self, code: KeyCode) {
        if let KeyCode::Char(c) = code {
            self.keyboard.emit("keydown", EventPayload::Key(c));
        }
    }

    fn on_video_key(&mut self, code: KeyCode) {
        let controls = self.video_player.controls();
        match code {
            KeyCode::Char(' ') => controls.toggle.emit("click", EventPayload::Empty),
            KeyCode::Left => controls
                .skips
                .emit("click", EventPayload::Attr("-10".to_string())),
            KeyCode::Right => controls
                .skips
                .emit("click", EventPayload::Attr("25".to_string())),
            KeyCode::Up | KeyCode::Down => {
                let step = if code == KeyCode::Up { 0.05 } else { -0.05 };
                let value = self.video_player.state().volume + step;
                controls.sliders.emit(
                    "change",
                    EventPayload::Control {
                        name: "volume".to_string(),
                        value,
                    },
                );
            }
            KeyCode::Char('[') | KeyCode::Char(']') => {
                let step = if code == KeyCode::Char(']') { 0.1 } else { -0.1 };
                let value = self.video_player.state().rate + step;
                controls.sliders.emit(
                    "change",
                    EventPayload::Control {
                        name: "rate".to_string(),
                        value,
                    },
                );
            }
            KeyCode::Char(digit @ '0'..='9') => {
                let ratio = f64::from(digit as u8 - b'0') / 10.0;
                controls.progress.emit("scrub", EventPayload::Number(ratio));
            }
            _ => {}
        }
    }

    fn on_detection_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') | KeyCode::Enter => self.flush_dictation(),
            KeyCode::Char('.') => {
                self.flush_dictation();
                self.recognizer.end_session();
            }
            KeyCode::Backspace => {
                self.dictation_word.pop();
            }
            KeyCode::Char(c) => self.dictation_word.push(c),
            _ => {}
        }
    }

    fn flush_dictation(&mut self) {
        if self.dictation_word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.dictation_word);
        self.recognizer.hear(&word);
    }

    fn on_synthesis_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.text_panel
                    .emit("change", EventPayload::Text(self.utterance_draft.clone()));
            }
            KeyCode::Insert => self.text_panel.emit("speak", EventPayload::Empty),
            KeyCode::Delete => self.text_panel.emit("stop", EventPayload::Empty),
            KeyCode::Up | KeyCode::Down => {
                let step = if code == KeyCode::Up { 0.1 } else { -0.1 };
                let value = self.speech_synthesis.state().rate + step;
                self.voice_panel.emit(
                    "change",
                    EventPayload::Control {
                        name: "rate".to_string(),
                        value,
                    },
                );
            }
            KeyCode::PageUp | KeyCode::PageDown => {
                let step = if code == KeyCode::PageUp { 0.1 } else { -0.1 };
                let value = self.speech_synthesis.state().pitch + step;
                self.voice_panel.emit(
                    "change",
                    EventPayload::Control {
                        name: "pitch".to_string(),
                        value,
                    },
                );
            }
            KeyCode::Left | KeyCode::Right => {
                let state = self.speech_synthesis.state();
                if state.voices.is_empty() {
                    return;
                }
                let count = state.voices.len();
                let index = if code == KeyCode::Right {
                    (state.voice + 1) % count
                } else {
                    (state.voice + count - 1) % count
                };
                self.voice_panel
                    .emit("voice", EventPayload::Number(index as f64));
            }
            KeyCode::Backspace => {
                self.utterance_draft.pop();
            }
            KeyCode::Char(c) => self.utterance_draft.push(c),
            _ => {}
        }
    }

    fn on_nav_key(&mut self, code: KeyCode) {
        let offset = match code {
            KeyCode::Up => self.scroll_offset.saturating_sub(1),
            KeyCode::Down => self.scroll_offset.saturating_add(1).min(MAX_SCROLL),
            KeyCode::PageUp => self.scroll_offset.saturating_sub(10),
            KeyCode::PageDown => self.scroll_offset.saturating_add(10).min(MAX_SCROLL),
            KeyCode::Home => 0,
            KeyCode::End => MAX_SCROLL,
            _ => return,
        };
        self.scroll_offset = offset;
        self.window
            .emit("scroll", EventPayload::Number(f64::from(offset)));
    }

    // -- Snapshot accessors for the renderer ---------------------------------

    pub fn drum_kit(&self) -> &DrumKit {
        &self.drum_kit
    }

    pub fn video_player(&self) -> &VideoPlayer {
        &self.video_player
    }

    pub fn speech_detection(&self) -> &SpeechDetection {
        &self.speech_detection
    }

    pub fn speech_synthesis(&self) -> &SpeechSynthesis {
        &self.speech_synthesis
    }

    pub fn sticky_nav(&self) -> &StickyNav {
        &self.sticky_nav
    }

    pub fn utterance_draft(&self) -> &str {
        &self.utterance_draft
    }

    pub fn dictation_word(&self) -> &str {
        &self.dictation_word
    }
}
