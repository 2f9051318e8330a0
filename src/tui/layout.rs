//! Layout definitions for the TUI
//!
//! Title on top, the form below it, the result panel filling the rest, and
//! a one-line key hint bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the form screen
pub struct FormLayout {
    pub title: Rect,
    /// Bordered form area (amount, source year, target year)
    pub form: Rect,
    pub result: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(5), // Form: 3 fields + borders
                Constraint::Min(6),    // Result
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            title: chunks[0],
            form: chunks[1],
            result: chunks[2],
            status_bar: chunks[3],
        }
    }

    /// Split the inner form area into one row per field
    pub fn form_rows(inner: Rect) -> [Rect; 3] {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        [rows[0], rows[1], rows[2]]
    }
}
