//! Year selector widget
//!
//! Shows the selected year between arrows; the owning form changes the
//! selection with Up/Down.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

#[derive(Debug, Clone)]
pub struct YearPicker {
    pub label: String,
    pub year: i32,
    pub focused: bool,
    /// Whether a newer year is available above the selection
    pub has_newer: bool,
    /// Whether an older year is available below the selection
    pub has_older: bool,
}

impl Widget for YearPicker {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let arrow = Style::default().fg(Color::DarkGray);
        let year_style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let line = Line::from(vec![
            Span::styled(self.label, Style::default().fg(Color::Cyan)),
            Span::raw(": "),
            Span::styled(if self.has_older { "◀ " } else { "  " }, arrow),
            Span::styled(format!(" {} ", self.year), year_style),
            Span::styled(if self.has_newer { " ▶" } else { "  " }, arrow),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
