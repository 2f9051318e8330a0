//! Result panel: the last conversion or the reason it was rejected

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Outcome};

/// Render the result panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Result ");

    let lines = match &app.outcome {
        None => vec![Line::from(Span::styled(
            "Enter an amount, pick two years and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(Outcome::Rejected(message)) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
        Some(Outcome::Converted(view)) => {
            let label = Style::default().fg(Color::Cyan);
            vec![
                Line::from(Span::styled(
                    view.headline.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(view.explanation.clone()),
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("{:<10}", view.source_label), label),
                    Span::raw(view.source_index.clone()),
                ]),
                Line::from(vec![
                    Span::styled(format!("{:<10}", view.target_label), label),
                    Span::raw(view.target_index.clone()),
                ]),
                Line::from(vec![
                    Span::styled(format!("{:<10}", "Change"), label),
                    Span::raw(view.change.clone()),
                ]),
            ]
        }
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
