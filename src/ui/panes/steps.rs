//! Step list pane: every step of the loaded run with the cursor marked

use crate::snapshot::{Run, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn kind_style(kind: StepKind) -> Style {
    let color = match kind {
        StepKind::Start | StepKind::Complete => DEFAULT_THEME.primary,
        StepKind::Found => DEFAULT_THEME.success,
        StepKind::NotFound => DEFAULT_THEME.error,
        StepKind::Swap | StepKind::Write | StepKind::Pivot => DEFAULT_THEME.secondary,
        _ => DEFAULT_THEME.marked,
    };
    Style::default().fg(color)
}

/// Render the step list, keeping the cursor row in view
///
/// `scroll_offset` is the first visible row; it follows the cursor when the
/// cursor leaves the visible window.
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    run: Option<&Run>,
    cursor: usize,
    scroll_offset: &mut usize,
) {
    let title = match run {
        Some(run) => format!(" Steps: {} ", run.algorithm()),
        None => " Steps ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(run) = run else {
        let paragraph = Paragraph::new("(no run: press : and type e.g. bubble, find 4, bfs 1 3)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if cursor < *scroll_offset {
        *scroll_offset = cursor;
    } else if cursor >= *scroll_offset + visible_height {
        *scroll_offset = cursor + 1 - visible_height;
    }
    let max_scroll = run.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let number_width = run.len().to_string().len();
    let lines: Vec<Line> = run
        .steps()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, step)| {
            let is_current = idx == cursor;
            let marker = if is_current { "▶ " } else { "  " };
            let mut spans = vec![
                Span::styled(
                    format!("{}{:>width$} ", marker, idx, width = number_width),
                    if is_current {
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(DEFAULT_THEME.comment)
                    },
                ),
                Span::styled(format!("{:<10}", step.kind.label()), kind_style(step.kind)),
                Span::styled(step.description.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ];
            if is_current {
                for span in &mut spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
