//! Form view: amount input and the two year selectors

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::{App, FormField};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::YearPicker;

/// Render the form panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Convert ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [amount_row, source_row, target_row] = FormLayout::form_rows(inner);

    frame.render_widget(
        app.amount.clone().focused(app.focus == FormField::Amount),
        amount_row,
    );

    frame.render_widget(
        year_picker(app, "From year", app.source_index, FormField::SourceYear),
        source_row,
    );
    frame.render_widget(
        year_picker(app, "To year  ", app.target_index, FormField::TargetYear),
        target_row,
    );
}

fn year_picker(app: &App, label: &str, index: usize, field: FormField) -> YearPicker {
    YearPicker {
        label: label.to_string(),
        year: app.years[index],
        focused: app.focus == field,
        has_newer: index > 0,
        has_older: index + 1 < app.years.len(),
    }
}
