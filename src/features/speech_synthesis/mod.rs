//! Day 23 — speech synthesis. An utterance panel (textarea, speak/stop
//! buttons) and a voice panel (rate/pitch sliders, voice picker) drive the
//! synthesizer; changing any utterance parameter re-speaks it.

mod intent;
mod reducer;
mod state;

pub use intent::SpeechSynthesisIntent;
pub use reducer::SpeechSynthesisReducer;
pub use state::{SpeechSynthesisState, PITCH_RANGE, RATE_RANGE};

use std::sync::Arc;

use crate::flow::{Composer, EventPayload, Lifecycle, Phase, RawEvent, Source, Store};
use crate::platform::Synthesizer;

pub struct SpeechSynthesis {
    synth: Arc<Synthesizer>,
    text_panel: Arc<Source>,
    voice_panel: Arc<Source>,
    store: Arc<Store<SpeechSynthesisReducer>>,
    lifecycle: Lifecycle,
}

impl SpeechSynthesis {
    pub fn new(synth: Arc<Synthesizer>, text_panel: Arc<Source>, voice_panel: Arc<Source>) -> Self {
        Self::with_utterance(synth, text_panel, voice_panel, SpeechSynthesisState::default())
    }

    /// Composition root with explicit initial utterance parameters.
    /// The voice list comes from the synthesizer, not the caller.
    pub fn with_utterance(
        synth: Arc<Synthesizer>,
        text_panel: Arc<Source>,
        voice_panel: Arc<Source>,
        initial: SpeechSynthesisState,
    ) -> Self {
        let initial = SpeechSynthesisState {
            voices: synth.voices(),
            rate: initial.rate.clamp(RATE_RANGE.0, RATE_RANGE.1),
            pitch: initial.pitch.clamp(PITCH_RANGE.0, PITCH_RANGE.1),
            ..initial
        };
        Self {
            synth,
            text_panel,
            voice_panel,
            store: Store::with_state(initial),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn start(&mut self) {
        let composer = Composer::new()
            .bind(&self.text_panel, "change", |raw| {
                raw.payload.as_text().map(|text| SpeechSynthesisIntent::SetText {
                    text: text.to_string(),
                })
            })
            .bind(&self.text_panel, "speak", |_| {
                Some(SpeechSynthesisIntent::Toggle { restart: true })
            })
            .bind(&self.text_panel, "stop", |_| {
                Some(SpeechSynthesisIntent::Toggle { restart: false })
            })
            .bind(&self.voice_panel, "change", slider_intent)
            .bind(&self.voice_panel, "voice", |raw| {
                raw.payload.as_number().map(|index| SpeechSynthesisIntent::SelectVoice {
                    index: index.max(0.0) as usize,
                })
            })
            .bind(self.synth.events(), "start", |_| {
                Some(SpeechSynthesisIntent::SpeakingStarted)
            })
            .bind(self.synth.events(), "boundary", |raw| {
                raw.payload.as_number().map(|index| SpeechSynthesisIntent::WordSpoken {
                    index: index.max(0.0) as usize,
                })
            })
            .bind(self.synth.events(), "end", |_| {
                Some(SpeechSynthesisIntent::SpeakingEnded)
            });

        let store = Arc::clone(&self.store);
        let synth = Arc::clone(&self.synth);
        self.lifecycle.start(move || {
            composer.attach(move |intent| {
                store.apply(intent.clone());
                drive_synth(&synth, &store.current(), &intent);
            })
        });
    }

    pub fn stop(&mut self) {
        self.lifecycle.stop();
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn state(&self) -> SpeechSynthesisState {
        self.store.current()
    }

    pub fn store(&self) -> &Arc<Store<SpeechSynthesisReducer>> {
        &self.store
    }
}

fn slider_intent(raw: &RawEvent) -> Option<SpeechSynthesisIntent> {
    match &raw.payload {
        EventPayload::Control { name, value } if name == "rate" => {
            Some(SpeechSynthesisIntent::SetRate { value: *value })
        }
        EventPayload::Control { name, value } if name == "pitch" => {
            Some(SpeechSynthesisIntent::SetPitch { value: *value })
        }
        _ => None,
    }
}

/// Drive the synthesizer after the intent has been applied. Any utterance
/// parameter change re-speaks the committed text, matching the page's
/// behavior of restarting speech whenever a control moves.
fn drive_synth(synth: &Synthesizer, snapshot: &SpeechSynthesisState, intent: &SpeechSynthesisIntent) {
    match intent {
        SpeechSynthesisIntent::Toggle { restart: true }
        | SpeechSynthesisIntent::SetText { .. }
        | SpeechSynthesisIntent::SetRate { .. }
        | SpeechSynthesisIntent::SetPitch { .. }
        | SpeechSynthesisIntent::SelectVoice { .. } => {
            synth.cancel();
            synth.speak(&snapshot.text, snapshot.rate);
        }
        SpeechSynthesisIntent::Toggle { restart: false } => synth.cancel(),
        SpeechSynthesisIntent::SpeakingStarted
        | SpeechSynthesisIntent::WordSpoken { .. }
        | SpeechSynthesisIntent::SpeakingEnded => {}
    }
}
