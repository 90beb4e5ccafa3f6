//! Simulated speech engines: a word-by-word synthesizer and a
//! session-based recognizer.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

use crate::flow::{EventPayload, Source};

/// Words per second spoken at rate 1.0.
const BASE_WORDS_PER_SECOND: f64 = 2.0;

/// Floor applied to the utterance rate so speech always makes progress.
const MIN_EFFECTIVE_RATE: f64 = 0.1;

/// Speaks an utterance one word at a time, paced by the UI tick.
///
/// Emits `start` when an utterance begins, `boundary` (word index payload)
/// as each word is spoken, and `end` when the utterance finishes or is
/// cancelled mid-word.
pub struct Synthesizer {
    events: Arc<Source>,
    voices: Vec<String>,
    inner: Mutex<Utterance>,
}

struct Utterance {
    words: Vec<String>,
    next_word: usize,
    rate: f64,
    carry: f64,
    speaking: bool,
}

impl Synthesizer {
    pub fn new() -> Self {
        Self {
            events: Source::new("synthesizer"),
            voices: ["Alto", "Baritone", "Whisper", "Robot"]
                .into_iter()
                .map(String::from)
                .collect(),
            inner: Mutex::new(Utterance {
                words: Vec::new(),
                next_word: 0,
                rate: 1.0,
                carry: 0.0,
                speaking: false,
            }),
        }
    }

    pub fn events(&self) -> &Arc<Source> {
        &self.events
    }

    /// Installed voice names.
    pub fn voices(&self) -> Vec<String> {
        self.voices.clone()
    }

    /// Begin speaking `text` at `rate`, cancelling any utterance already in
    /// progress. Empty text cancels without starting a new utterance.
    pub fn speak(&self, text: &str, rate: f64) {
        let (was_speaking, started) = {
            let mut utterance = self.inner.lock();
            let was_speaking = utterance.speaking;
            utterance.words = text.split_whitespace().map(String::from).collect();
            utterance.next_word = 0;
            utterance.carry = 0.0;
            utterance.rate = rate;
            utterance.speaking = !utterance.words.is_empty();
            (was_speaking, utterance.speaking)
        };
        trace!(started, "synthesizer speak");
        if was_speaking {
            self.events.emit("end", EventPayload::Empty);
        }
        if started {
            self.events.emit("start", EventPayload::Empty);
        }
    }

    /// Stop the current utterance, if any.
    pub fn cancel(&self) {
        let was_speaking = {
            let mut utterance = self.inner.lock();
            let was_speaking = utterance.speaking;
            utterance.speaking = false;
            utterance.words.clear();
            utterance.next_word = 0;
            utterance.carry = 0.0;
            was_speaking
        };
        if was_speaking {
            self.events.emit("end", EventPayload::Empty);
        }
    }

    /// Advance speech by `dt` seconds of wall time.
    pub fn tick(&self, dt: f64) {
        let (boundaries, finished) = {
            let mut utterance = self.inner.lock();
            if !utterance.speaking {
                return;
            }
            let rate = utterance.rate.max(MIN_EFFECTIVE_RATE);
            utterance.carry += dt * rate * BASE_WORDS_PER_SECOND;
            let mut boundaries = Vec::new();
            while utterance.carry >= 1.0 && utterance.next_word < utterance.words.len() {
                boundaries.push(utterance.next_word);
                utterance.next_word += 1;
                utterance.carry -= 1.0;
            }
            let finished = utterance.next_word >= utterance.words.len();
            if finished {
                utterance.speaking = false;
            }
            (boundaries, finished)
        };
        for index in boundaries {
            self.events.emit("boundary", EventPayload::Number(index as f64));
        }
        if finished {
            self.events.emit("end", EventPayload::Empty);
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.inner.lock().speaking
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Session-based transcript producer.
///
/// While listening, each heard phrase updates the session's interim
/// transcript (`result` event, text payload). Closing the session emits
/// `end`; the consumer decides whether to start a new one.
pub struct Recognizer {
    events: Arc<Source>,
    inner: Mutex<Session>,
}

struct Session {
    listening: bool,
    heard: Vec<String>,
}

impl Recognizer {
    pub fn new() -> Self {
        Self {
            events: Source::new("recognizer"),
            inner: Mutex::new(Session {
                listening: false,
                heard: Vec::new(),
            }),
        }
    }

    pub fn events(&self) -> &Arc<Source> {
        &self.events
    }

    /// Open a fresh session. No-op while one is already open.
    pub fn start(&self) {
        let mut session = self.inner.lock();
        if session.listening {
            return;
        }
        session.listening = true;
        session.heard.clear();
    }

    /// A phrase was heard; emits the session transcript so far.
    pub fn hear(&self, phrase: &str) {
        let transcript = {
            let mut session = self.inner.lock();
            if !session.listening {
                return;
            }
            session.heard.push(phrase.to_string());
            session.heard.join(" ")
        };
        self.events.emit("result", EventPayload::Text(transcript));
    }

    /// Close the current session and emit `end`.
    pub fn end_session(&self) {
        {
            let mut session = self.inner.lock();
            if !session.listening {
                return;
            }
            session.listening = false;
        }
        self.events.emit("end", EventPayload::Empty);
    }

    pub fn is_listening(&self) -> bool {
        self.inner.lock().listening
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}
