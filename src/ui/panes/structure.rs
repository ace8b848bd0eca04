//! Structure pane: the current step's snapshot with its highlights
//!
//! Sequences (array, stack, queue, linked list) are drawn as rows of boxed
//! cells in a paragraph. Trees and graphs go through a braille [`Canvas`]
//! using the positions computed by [`crate::layout`].

use crate::layout::{Emphasis, Scene};
use crate::structures::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

fn cell_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Normal => Style::default().fg(DEFAULT_THEME.fg),
        _ => Style::default()
            .bg(DEFAULT_THEME.emphasis(emphasis))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    }
}

/// Render the structure pane for a laid-out scene
pub fn render_structure_pane(frame: &mut Frame, area: Rect, scene: &Scene, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if scene.nodes.is_empty() {
        let paragraph = Paragraph::new(format!("(empty {})", scene.kind))
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    match scene.kind {
        StructureKind::Tree | StructureKind::Graph => render_canvas(frame, area, scene, block),
        _ => {
            let paragraph = Paragraph::new(sequence_lines(scene))
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
    }
}

fn sequence_lines(scene: &Scene) -> Vec<Line<'static>> {
    let width = scene
        .nodes
        .iter()
        .map(|n| n.value.to_string().len())
        .max()
        .unwrap_or(1);
    let cell = |value: i64, emphasis: Emphasis| {
        Span::styled(format!("[{:^width$}]", value, width = width + 2), cell_style(emphasis))
    };
    let muted = Style::default().fg(DEFAULT_THEME.comment);

    let mut lines = vec![Line::default()];
    match scene.kind {
        StructureKind::Stack => {
            // Nodes are stored bottom to top; row 0 is the top
            let mut rows: Vec<_> = scene.nodes.iter().collect();
            rows.sort_by(|a, b| a.y.total_cmp(&b.y));
            for (i, node) in rows.into_iter().enumerate() {
                let tag = if i == 0 { " <- top" } else { "       " };
                lines.push(Line::from(vec![
                    Span::raw("       "),
                    cell(node.value, node.emphasis),
                    Span::styled(tag, muted),
                ]));
            }
        }
        StructureKind::LinkedList => {
            let mut spans = vec![Span::styled("head ", muted)];
            for node in &scene.nodes {
                spans.push(cell(node.value, node.emphasis));
                spans.push(Span::styled(" -> ", muted));
            }
            spans.push(Span::styled("null", muted));
            lines.push(Line::from(spans));
        }
        StructureKind::Queue => {
            let mut spans = vec![Span::styled("front ", muted)];
            spans.extend(scene.nodes.iter().map(|n| cell(n.value, n.emphasis)));
            spans.push(Span::styled(" back", muted));
            lines.push(Line::from(spans));
        }
        _ => {
            lines.push(Line::from(
                scene
                    .nodes
                    .iter()
                    .map(|n| cell(n.value, n.emphasis))
                    .collect::<Vec<_>>(),
            ));
            // Index row under the cells
            lines.push(Line::from(
                (0..scene.nodes.len())
                    .map(|i| Span::styled(format!(" {:^width$} ", i, width = width + 2), muted))
                    .collect::<Vec<_>>(),
            ));
        }
    }
    lines
}

fn render_canvas(frame: &mut Frame, area: Rect, scene: &Scene, block: Block) {
    // Layout y grows downward; canvas y grows upward
    let [x_min, x_max] = scene.x_bounds;
    let [y_min, y_max] = scene.y_bounds;
    let pad = if scene.kind == StructureKind::Graph { 0.3 } else { 0.8 };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([x_min - pad, x_max + pad])
        .y_bounds([-y_max - pad, -y_min + pad])
        .paint(|ctx| {
            for edge in &scene.edges {
                if let Some(((x1, y1), (x2, y2))) = scene.segment(edge) {
                    let color = match edge.emphasis {
                        Emphasis::Normal => DEFAULT_THEME.comment,
                        other => DEFAULT_THEME.emphasis(other),
                    };
                    ctx.draw(&CanvasLine {
                        x1,
                        y1: -y1,
                        x2,
                        y2: -y2,
                        color,
                    });
                }
            }
            ctx.layer();
            for node in &scene.nodes {
                ctx.print(
                    node.x,
                    -node.y,
                    Span::styled(format!("({})", node.value), cell_style(node.emphasis)),
                );
            }
        });
    frame.render_widget(canvas, area);
}
