//! Narration pane: what the current step means

use crate::snapshot::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub struct NarrationRenderData<'a> {
    pub step: Option<&'a Step>,
    /// Narration of the most recent accepted operation
    pub last_operation: Option<&'a str>,
}

pub fn render_narration_pane(frame: &mut Frame, area: Rect, data: &NarrationRenderData) {
    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();
    match data.step {
        Some(step) => {
            lines.push(Line::from(Span::styled(
                step.description.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                step.annotation.clone(),
                Style::default().fg(DEFAULT_THEME.annotation),
            )));
            let values = step.snapshot.values_of(&step.highlighted);
            if !values.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("active ", Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(
                        format!("{:?}", values),
                        Style::default().fg(DEFAULT_THEME.highlight),
                    ),
                ]));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "No run loaded",
            Style::default().fg(DEFAULT_THEME.comment),
        ))),
    }
    if let Some(last) = data.last_operation {
        lines.push(Line::from(vec![
            Span::styled("last ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(last.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
