//! Status bar rendering with keybindings and playback indicators

use crate::errors::Severity;
use crate::playback::{PlaybackState, Speed};
use crate::structures::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Set when the message reports a rejected action
    pub severity: Option<Severity>,
    pub cursor: usize,
    /// Steps in the loaded run, zero when idle
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: Speed,
    pub kind: StructureKind,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let step_text = if data.total_steps == 0 {
        format!(" {} ", data.kind)
    } else {
        format!(" {} | Step {}/{} ", data.kind, data.cursor + 1, data.total_steps)
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(match data.severity {
                    Some(severity) => DEFAULT_THEME.severity(severity),
                    None => DEFAULT_THEME.primary,
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(match data.severity {
                    Some(severity) => DEFAULT_THEME.severity(severity),
                    None => DEFAULT_THEME.fg,
                }),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (key, desc) in [
        (" : ", " command "),
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" ↵ / ⌫ ", " end/start "),
        (" +/- ", " speed "),
        (" ⇥ ", " structure "),
        (" r ", " reset "),
        (" q ", " quit "),
    ] {
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
        right_spans.push(Span::styled("│", sep_style));
    }
    right_spans.push(Span::styled(format!(" {} ", data.speed), desc_style));

    let badge = match data.state {
        PlaybackState::Playing => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        PlaybackState::Complete => Some((" END ", DEFAULT_THEME.error)),
        PlaybackState::Ready => Some((" START ", DEFAULT_THEME.success)),
        PlaybackState::Paused => Some((" PAUSED ", DEFAULT_THEME.primary)),
        PlaybackState::Idle => None,
    };
    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            .alignment(Alignment::Right),
        layout[1],
    );
}

/// Render the command prompt in place of the status bar
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![
        Span::styled(
            " ⌨ COMMAND ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" : {}", input),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            "█",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.secondary),
        ),
        Span::styled(
            "   ↵ run  esc cancel",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(DEFAULT_THEME.current_line_bg)),
        area,
    );
}
