//! Status bar view
//!
//! Shows the key hints for the focused field

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FormField};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.focus {
        FormField::Amount => &[
            ("Enter", "calculate"),
            ("Tab", "next field"),
            ("Esc", "quit"),
        ],
        FormField::SourceYear | FormField::TargetYear => &[
            ("↑/↓", "change year"),
            ("Enter", "calculate"),
            ("Tab", "next field"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::White),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
