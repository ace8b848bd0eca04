use crate::errors::Severity;
use crate::layout::Emphasis;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub highlight: Color, // Active elements of a step
    pub marked: Color,    // Secondary highlight set
    pub annotation: Color,
}

impl Theme {
    /// Color for an element with the given emphasis
    pub fn emphasis(&self, emphasis: Emphasis) -> Color {
        match emphasis {
            Emphasis::Highlighted => self.highlight,
            Emphasis::Marked => self.marked,
            Emphasis::Normal => self.fg,
        }
    }

    /// Color for a rejected action's message
    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Warning => self.secondary,
            Severity::Info => self.primary,
            Severity::Error => self.error,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    highlight: Color::Rgb(249, 226, 175),      // Yellow
    marked: Color::Rgb(148, 226, 213),         // Cyan/teal
    annotation: Color::Rgb(245, 194, 231),     // Pink
};
