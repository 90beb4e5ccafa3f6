//! End-to-end wiring tests: platform events in, state snapshots out, side
//! effects driven back into the platform services.

use std::sync::Arc;

use demoreel::features::speech_detection::SpeechDetection;
use demoreel::features::speech_synthesis::{SpeechSynthesis, SpeechSynthesisState};
use demoreel::features::sticky_nav::StickyNav;
use demoreel::features::video_player::{VideoControls, VideoPlayer};
use demoreel::flow::{EventPayload, Source};
use demoreel::platform::{MediaElement, Recognizer, Synthesizer};

fn video_player(duration: f64) -> VideoPlayer {
    let mut player = VideoPlayer::new(
        Arc::new(MediaElement::new(duration)),
        VideoControls::new(),
    );
    player.start();
    player
}

// -- Video player -------------------------------------------------------------

#[test]
fn toggle_click_starts_the_transport() {
    let player = video_player(100.0);
    player.controls().toggle.emit("click", EventPayload::Empty);

    assert!(player.state().playing);
    assert!(!player.media().is_paused());
}

#[test]
fn skip_buttons_move_state_and_media_together() {
    let player = video_player(100.0);
    player
        .controls()
        .skips
        .emit("click", EventPayload::Attr("25".to_string()));
    assert_eq!(player.state().position, 25.0);
    assert_eq!(player.media().position(), 25.0);

    player
        .controls()
        .skips
        .emit("click", EventPayload::Attr("-10".to_string()));
    assert_eq!(player.state().position, 15.0);
    assert_eq!(player.media().position(), 15.0);
}

#[test]
fn malformed_skip_attribute_is_a_noop_skip() {
    let player = video_player(100.0);
    player
        .controls()
        .skips
        .emit("click", EventPayload::Attr("25".to_string()));
    let before = player.state();

    player
        .controls()
        .skips
        .emit("click", EventPayload::Attr("abc".to_string()));
    // The intent was dispatched with zero seconds rather than dropped.
    assert_eq!(player.state().position, before.position);
    assert!(player.store().applied() > 0);
}

#[test]
fn skip_forward_then_back_from_the_start_lands_on_zero() {
    let player = video_player(100.0);
    player
        .controls()
        .skips
        .emit("click", EventPayload::Attr("10".to_string()));
    player
        .controls()
        .skips
        .emit("click", EventPayload::Attr("-10".to_string()));
    assert_eq!(player.state().position, 0.0);
}

#[test]
fn slider_changes_clamp_and_reach_the_media() {
    let player = video_player(100.0);
    player.controls().sliders.emit(
        "change",
        EventPayload::Control {
            name: "volume".to_string(),
            value: -5.0,
        },
    );
    assert_eq!(player.state().volume, 0.0);
    assert_eq!(player.media().volume(), 0.0);

    player.controls().sliders.emit(
        "change",
        EventPayload::Control {
            name: "rate".to_string(),
            value: 5.0,
        },
    );
    assert_eq!(player.state().rate, 2.0);
    assert_eq!(player.media().rate(), 2.0);
}

#[test]
fn ticking_the_media_streams_position_back_into_state() {
    let player = video_player(100.0);
    player.controls().toggle.emit("click", EventPayload::Empty);
    player.media().tick(1.0);
    assert_eq!(player.state().position, 1.0);

    player.media().tick(1.0);
    assert_eq!(player.state().position, 2.0);
}

#[test]
fn reaching_the_end_marks_the_state_ended() {
    let player = video_player(2.0);
    player.controls().toggle.emit("click", EventPayload::Empty);
    player.media().tick(5.0);

    let state = player.state();
    assert!(state.ended);
    assert!(!state.playing);
    assert_eq!(state.position, 2.0);
}

#[test]
fn stopped_player_ignores_clicks_and_media_events() {
    let mut player = video_player(100.0);
    player.controls().toggle.emit("click", EventPayload::Empty);
    let before = player.state();
    let applied = player.store().applied();

    player.stop();
    player.controls().toggle.emit("click", EventPayload::Empty);
    player
        .controls()
        .skips
        .emit("click", EventPayload::Attr("25".to_string()));
    player.media().tick(1.0);

    assert_eq!(player.state(), before);
    assert_eq!(player.store().applied(), applied);
}

// -- Speech detection ---------------------------------------------------------

#[test]
fn heard_phrases_stream_into_the_interim_transcript() {
    let recognizer = Arc::new(Recognizer::new());
    let mut feature = SpeechDetection::new(Arc::clone(&recognizer));
    feature.start();

    recognizer.hear("hello");
    recognizer.hear("world");
    assert_eq!(feature.state().interim, "hello world");
}

#[test]
fn session_end_commits_and_restarts_recognition() {
    let recognizer = Arc::new(Recognizer::new());
    let mut feature = SpeechDetection::new(Arc::clone(&recognizer));
    feature.start();

    recognizer.hear("hello world");
    recognizer.end_session();

    let state = feature.state();
    assert_eq!(state.committed, vec!["hello world".to_string()]);
    assert_eq!(state.sessions, 1);
    // The end handler reopened a session, as the page does.
    assert!(recognizer.is_listening());

    recognizer.hear("again");
    assert_eq!(feature.state().interim, "again");
}

#[test]
fn stopped_detection_keeps_its_transcript_frozen() {
    let recognizer = Arc::new(Recognizer::new());
    let mut feature = SpeechDetection::new(Arc::clone(&recognizer));
    feature.start();
    recognizer.hear("before stop");
    let before = feature.state();

    feature.stop();
    recognizer.hear("after stop");
    recognizer.end_session();
    assert_eq!(feature.state(), before);
}

// -- Speech synthesis ---------------------------------------------------------

fn synthesis() -> (Arc<Synthesizer>, Arc<Source>, Arc<Source>, SpeechSynthesis) {
    let synth = Arc::new(Synthesizer::new());
    let text_panel = Source::new("utterance-panel");
    let voice_panel = Source::new("voice-panel");
    let mut feature = SpeechSynthesis::with_utterance(
        Arc::clone(&synth),
        Arc::clone(&text_panel),
        Arc::clone(&voice_panel),
        SpeechSynthesisState {
            text: "three word utterance".to_string(),
            ..SpeechSynthesisState::default()
        },
    );
    feature.start();
    (synth, text_panel, voice_panel, feature)
}

#[test]
fn committing_text_respeaks_the_utterance() {
    let (synth, text_panel, _, feature) = synthesis();
    text_panel.emit("change", EventPayload::Text("say this now".to_string()));

    let state = feature.state();
    assert_eq!(state.text, "say this now");
    assert!(state.speaking);
    assert!(synth.is_speaking());
}

#[test]
fn the_utterance_finishes_word_by_word() {
    let (synth, text_panel, _, feature) = synthesis();
    text_panel.emit("speak", EventPayload::Empty);
    assert!(feature.state().speaking);

    // Three words at two words per second.
    synth.tick(1.0);
    assert_eq!(feature.state().spoken_words, 2);

    synth.tick(1.0);
    let state = feature.state();
    assert_eq!(state.spoken_words, 3);
    assert!(!state.speaking);
    assert!(!synth.is_speaking());
}

#[test]
fn stop_button_cancels_mid_utterance() {
    let (synth, text_panel, _, feature) = synthesis();
    text_panel.emit("speak", EventPayload::Empty);
    synth.tick(0.5);

    text_panel.emit("stop", EventPayload::Empty);
    assert!(!feature.state().speaking);
    assert!(!synth.is_speaking());
}

#[test]
fn voice_panel_changes_restart_with_new_parameters() {
    let (synth, _, voice_panel, feature) = synthesis();
    voice_panel.emit(
        "change",
        EventPayload::Control {
            name: "rate".to_string(),
            value: 2.0,
        },
    );
    assert_eq!(feature.state().rate, 2.0);
    assert!(synth.is_speaking());

    voice_panel.emit("voice", EventPayload::Number(1.0));
    assert_eq!(feature.state().voice, 1);
}

// -- Sticky nav ---------------------------------------------------------------

#[test]
fn scrolling_past_the_header_pins_the_nav() {
    let window = Source::new("window");
    let mut feature = StickyNav::new(Arc::clone(&window), 12, 3);
    feature.start();

    window.emit("scroll", EventPayload::Number(5.0));
    assert!(!feature.state().fixed);

    window.emit("scroll", EventPayload::Number(20.0));
    let state = feature.state();
    assert!(state.fixed);
    assert_eq!(state.padding_top, 3);

    window.emit("scroll", EventPayload::Number(0.0));
    assert!(!feature.state().fixed);
}

#[test]
fn stopped_nav_ignores_scrolling() {
    let window = Source::new("window");
    let mut feature = StickyNav::new(Arc::clone(&window), 12, 3);
    feature.start();
    window.emit("scroll", EventPayload::Number(20.0));
    let before = feature.state();

    feature.stop();
    window.emit("scroll", EventPayload::Number(0.0));
    assert_eq!(feature.state(), before);
}
