//! Renders each feature's state snapshot. Pure view code: reads snapshots,
//! draws widgets, mutates nothing.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::features::speech_synthesis::{PITCH_RANGE, RATE_RANGE};
use crate::features::video_player::RATE_RANGE as VIDEO_RATE_RANGE;
use crate::ui::app::{App, Demo};
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_body(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line> = Demo::ALL.iter().map(|demo| Line::from(demo.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.demo().index())
        .block(
            Block::default()
                .title("demoreel")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
        )
        .style(Style::default().fg(theme::DIM_TEXT))
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match app.demo() {
        Demo::DrumKit => draw_drum_kit(frame, app, area),
        Demo::VideoPlayer => draw_video_player(frame, app, area),
        Demo::SpeechDetection => draw_speech_detection(frame, app, area),
        Demo::SpeechSynthesis => draw_speech_synthesis(frame, app, area),
        Demo::StickyNav => draw_sticky_nav(frame, app, area),
    }
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.demo() {
        Demo::DrumKit => "a s d f g h j k l strike the pads",
        Demo::VideoPlayer => {
            "space play/pause · ←/→ skip · ↑/↓ volume · [/] rate · 0-9 scrub"
        }
        Demo::SpeechDetection => "type a word · space commits it · . ends the session",
        Demo::SpeechSynthesis => {
            "type · enter commit+speak · ins speak · del stop · ↑/↓ rate · pgup/pgdn pitch · ←/→ voice"
        }
        Demo::StickyNav => "↑/↓ scroll · pgup/pgdn faster · home/end jump",
    };
    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(theme::HEADER_TEXT)),
        Span::styled(
            "  ·  tab next demo · F1-F5 jump · esc quit",
            Style::default().fg(theme::DIM_TEXT),
        ),
    ]);
    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
    );
    frame.render_widget(footer, area);
}

// -- Drum kit -----------------------------------------------------------------

fn draw_drum_kit(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.drum_kit().state();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let pad_count = state.pads.len() as u32;
    let constraints: Vec<Constraint> = state
        .pads
        .iter()
        .map(|_| Constraint::Ratio(1, pad_count))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[1]);

    for (pad, cell) in state.pads.iter().zip(cells.iter()) {
        let style = if pad.lit {
            Style::default()
                .fg(theme::PAD_LIT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::HEADER_TEXT)
        };
        let body = vec![
            Line::from(Span::styled(
                pad.key.to_ascii_uppercase().to_string(),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(pad.sample, style)),
            Line::from(Span::styled(
                format!("{}", pad.hits),
                Style::default().fg(theme::DIM_TEXT),
            )),
        ];
        let widget = Paragraph::new(body).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if pad.lit {
                    theme::PAD_LIT
                } else {
                    theme::PAD_IDLE
                })),
        );
        frame.render_widget(widget, *cell);
    }

    let total = Paragraph::new(format!("{} hits", state.total_hits()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::DIM_TEXT));
    frame.render_widget(total, rows[3]);
}

// -- Video player -------------------------------------------------------------

fn draw_video_player(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.video_player().state();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let screen_text = if state.ended {
        "■ fin"
    } else if state.playing {
        "▶ playing"
    } else {
        "⏸ paused"
    };
    let screen = Paragraph::new(screen_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
        )
        .style(Style::default().fg(theme::HEADER_TEXT));
    frame.render_widget(screen, rows[0]);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "{} {} / {}",
            state.icon(),
            fmt_time(state.position),
            fmt_time(state.duration)
        )))
        .gauge_style(Style::default().fg(theme::PROGRESS))
        .ratio(state.progress_ratio());
    frame.render_widget(progress, rows[1]);

    let volume = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("volume"))
        .gauge_style(Style::default().fg(theme::VOLUME))
        .ratio(state.volume.clamp(0.0, 1.0));
    frame.render_widget(volume, rows[2]);

    let rate_ratio = ((state.rate - VIDEO_RATE_RANGE.0)
        / (VIDEO_RATE_RANGE.1 - VIDEO_RATE_RANGE.0))
        .clamp(0.0, 1.0);
    let rate = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("rate ×{:.1}", state.rate)),
        )
        .gauge_style(Style::default().fg(theme::ACCENT))
        .ratio(rate_ratio);
    frame.render_widget(rate, rows[3]);
}

fn fmt_time(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

// -- Speech detection ---------------------------------------------------------

fn draw_speech_detection(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.speech_detection().state();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let mut lines: Vec<Line> = state
        .committed
        .iter()
        .map(|paragraph| Line::from(paragraph.as_str()))
        .collect();
    let mut open_line = vec![Span::styled(
        state.interim.clone(),
        Style::default().fg(theme::INTERIM_TEXT),
    )];
    if !app.dictation_word().is_empty() {
        if !state.interim.is_empty() {
            open_line.push(Span::raw(" "));
        }
        open_line.push(Span::styled(
            app.dictation_word().to_string(),
            Style::default()
                .fg(theme::DIM_TEXT)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    open_line.push(Span::styled("▌", Style::default().fg(theme::ACCENT)));
    lines.push(Line::from(open_line));

    let words = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("words")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
        )
        .style(Style::default().fg(theme::HEADER_TEXT));
    frame.render_widget(words, rows[0]);

    let status = Paragraph::new(format!(
        "{} · {} sessions",
        if state.listening {
            "listening"
        } else {
            "not listening"
        },
        state.sessions
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(theme::DIM_TEXT));
    frame.render_widget(status, rows[1]);
}

// -- Speech synthesis ---------------------------------------------------------

fn draw_speech_synthesis(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.speech_synthesis().state();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let editor = Paragraph::new(format!("{}▌", app.utterance_draft()))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("utterance (enter to commit)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
        )
        .style(Style::default().fg(theme::HEADER_TEXT));
    frame.render_widget(editor, rows[0]);

    // Committed text with spoken words highlighted as boundaries arrive.
    let mut spans = Vec::new();
    for (index, word) in state.text.split_whitespace().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if index < state.spoken_words {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::HEADER_TEXT)
        };
        spans.push(Span::styled(word.to_string(), style));
    }
    let speaking_title = if state.speaking {
        format!(
            "speaking · {}/{} words",
            state.spoken_words,
            state.word_count()
        )
    } else {
        "idle".to_string()
    };
    let spoken = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(speaking_title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
        );
    frame.render_widget(spoken, rows[1]);

    let rate_ratio = ((state.rate - RATE_RANGE.0) / (RATE_RANGE.1 - RATE_RANGE.0)).clamp(0.0, 1.0);
    let rate = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("rate {:.1}", state.rate)),
        )
        .gauge_style(Style::default().fg(theme::ACCENT))
        .ratio(rate_ratio);
    frame.render_widget(rate, rows[2]);

    let pitch_ratio =
        ((state.pitch - PITCH_RANGE.0) / (PITCH_RANGE.1 - PITCH_RANGE.0)).clamp(0.0, 1.0);
    let pitch = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("pitch {:.1}", state.pitch)),
        )
        .gauge_style(Style::default().fg(theme::VOLUME))
        .ratio(pitch_ratio);
    frame.render_widget(pitch, rows[3]);

    let voice = Paragraph::new(format!(
        "voice: {}",
        state.voice_name().unwrap_or("(none)")
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(theme::DIM_TEXT));
    frame.render_widget(voice, rows[4]);
}

// -- Sticky nav ---------------------------------------------------------------

const STORY: [&str; 12] = [
    "A story about getting lost.",
    "",
    "We left the trailhead at dawn, certain the ridge would take an hour.",
    "By noon the path had thinned to a deer track, then to nothing at all.",
    "The map said river; the ground said granite.",
    "",
    "Nobody panicked. Somebody always panics, but not that day.",
    "We walked the contour line until the trees opened up,",
    "and the valley we did not plan to find was better than the one we lost.",
    "",
    "The nav bar stayed exactly where it was supposed to be, though.",
    "Scroll back up and watch it let go.",
];

fn draw_sticky_nav(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.sticky_nav().state();

    let nav_line = Line::from(vec![
        Span::styled(
            if state.fixed { " LOST. " } else { "" },
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " HOME   ABOUT   IMAGES   LOCATIONS   MAPS ",
            Style::default().fg(theme::HEADER_TEXT),
        ),
    ]);

    if state.fixed {
        // Nav pinned to the viewport; the page keeps scrolling underneath,
        // padded where the nav left the flow.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(state.nav_height), Constraint::Min(1)])
            .split(area);

        let nav = Paragraph::new(nav_line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().bg(theme::NAV_BG).fg(theme::HEADER_TEXT));
        frame.render_widget(nav, rows[0]);

        let page = Paragraph::new(page_lines(&state, true))
            .scroll((state.offset, 0))
            .style(Style::default().fg(theme::HEADER_TEXT));
        frame.render_widget(page, rows[1]);
    } else {
        let page = Paragraph::new(page_lines(&state, false))
            .scroll((state.offset, 0))
            .style(Style::default().fg(theme::HEADER_TEXT));
        frame.render_widget(page, area);
    }
}

/// The scrolled page: hero header, nav in the flow (or padding where it
/// was), then the story.
fn page_lines(
    state: &crate::features::sticky_nav::StickyNavState,
    padded: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for row in 0..state.nav_top {
        if row == state.nav_top / 2 {
            lines.push(
                Line::from(Span::styled(
                    "A STORY ABOUT GETTING LOST",
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
        } else {
            lines.push(Line::from("~").alignment(Alignment::Center));
        }
    }
    for _ in 0..state.nav_height {
        if padded {
            lines.push(Line::from(""));
        } else {
            lines.push(
                Line::from(Span::styled(
                    "  LOST.   HOME   ABOUT   IMAGES   LOCATIONS   MAPS",
                    Style::default().bg(theme::NAV_BG).fg(theme::HEADER_TEXT),
                ))
                .alignment(Alignment::Center),
            );
        }
    }
    for paragraph in STORY {
        lines.push(Line::from(paragraph));
        lines.push(Line::from(""));
    }
    lines
}
