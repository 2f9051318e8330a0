//! Views for the TUI

pub mod form;
pub mod result;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

use super::app::App;
use super::layout::FormLayout;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let layout = FormLayout::new(frame.area());

    frame.render_widget(
        Span::styled(
            " Konsumprisindeks · KPI calculator",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        layout.title,
    );

    form::render(frame, app, layout.form);
    result::render(frame, app, layout.result);
    status_bar::render(frame, app, layout.status_bar);
}
