//! Application state for the TUI
//!
//! The App struct holds the form fields and the last outcome. It never
//! renders anything itself; views read it and the handler mutates it.

use crate::config::Settings;
use crate::display::ConversionView;
use crate::error::KpiError;
use crate::services::{parse_amount, ConversionEngine};

use super::widgets::TextInput;

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Amount,
    SourceYear,
    TargetYear,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Amount => FormField::SourceYear,
            FormField::SourceYear => FormField::TargetYear,
            FormField::TargetYear => FormField::Amount,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Amount => FormField::TargetYear,
            FormField::SourceYear => FormField::Amount,
            FormField::TargetYear => FormField::SourceYear,
        }
    }
}

/// Result of the last calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted(ConversionView),
    Rejected(String),
}

/// Main application state
pub struct App<'a> {
    pub engine: &'a ConversionEngine,
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub focus: FormField,
    pub amount: TextInput,

    /// Selectable years, newest first
    pub years: Vec<i32>,
    pub source_index: usize,
    pub target_index: usize,

    /// Outcome of the last calculation, if any
    pub outcome: Option<Outcome>,
}

impl<'a> App<'a> {
    /// Create a new App with default years picked for `current_year`
    pub fn new(engine: &'a ConversionEngine, settings: &'a Settings, current_year: i32) -> Self {
        let years = engine.table().years_desc();
        let (source, target) = engine.default_years(current_year, settings.default_lookback_years);
        let position = |year: i32| years.iter().position(|&y| y == year).unwrap_or(0);

        Self {
            engine,
            settings,
            should_quit: false,
            focus: FormField::Amount,
            amount: TextInput::new()
                .label("Amount")
                .placeholder(format!("e.g. 1 000 ({})", settings.currency_code)),
            source_index: position(source),
            target_index: position(target),
            years,
            outcome: None,
        }
    }

    pub fn source_year(&self) -> i32 {
        self.years[self.source_index]
    }

    pub fn target_year(&self) -> i32 {
        self.years[self.target_index]
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type into the amount field
    ///
    /// Only digits, separators and spaces are accepted. A minus sign is
    /// dropped so the field can never hold a negative amount.
    pub fn type_amount_char(&mut self, c: char) {
        if c.is_ascii_digit() || matches!(c, '.' | ',' | ' ') {
            self.amount.insert(c);
        }
    }

    /// Move the focused year selector to a newer year
    pub fn select_newer_year(&mut self) {
        if let Some(index) = self.focused_year_index() {
            *index = index.saturating_sub(1);
        }
    }

    /// Move the focused year selector to an older year
    pub fn select_older_year(&mut self) {
        let last = self.years.len().saturating_sub(1);
        if let Some(index) = self.focused_year_index() {
            *index = (*index + 1).min(last);
        }
    }

    fn focused_year_index(&mut self) -> Option<&mut usize> {
        match self.focus {
            FormField::SourceYear => Some(&mut self.source_index),
            FormField::TargetYear => Some(&mut self.target_index),
            FormField::Amount => None,
        }
    }

    /// Validate the form and run the conversion
    pub fn calculate(&mut self) {
        let amount = parse_amount(self.amount.value());
        let (source, target) = (self.source_year(), self.target_year());

        let outcome = self
            .engine
            .validate(amount, source, target)
            .and_then(|_| amount.ok_or(KpiError::InvalidAmount))
            .and_then(|amount| self.engine.convert(amount, source, target));

        self.outcome = Some(match outcome {
            Ok(result) => Outcome::Converted(ConversionView::new(&result, self.settings)),
            Err(e) => {
                if matches!(e, KpiError::InvalidAmount) {
                    self.focus = FormField::Amount;
                }
                Outcome::Rejected(e.to_string())
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndexTable;

    fn engine() -> ConversionEngine {
        ConversionEngine::new(IndexTable::ssb())
    }

    #[test]
    fn test_defaults() {
        let engine = engine();
        let settings = Settings::default();
        let app = App::new(&engine, &settings, 2026);

        assert_eq!(app.years.first(), Some(&2024));
        assert_eq!(app.source_year(), 2021);
        assert_eq!(app.target_year(), 2024);
        assert_eq!(app.focus, FormField::Amount);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_focus_cycles() {
        let engine = engine();
        let settings = Settings::default();
        let mut app = App::new(&engine, &settings, 2026);

        app.focus_next();
        assert_eq!(app.focus, FormField::SourceYear);
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focus, FormField::Amount);
        app.focus_previous();
        assert_eq!(app.focus, FormField::TargetYear);
    }

    #[test]
    fn test_year_selection_is_clamped() {
        let engine = engine();
        let settings = Settings::default();
        let mut app = App::new(&engine, &settings, 2026);

        app.focus = FormField::TargetYear;
        app.select_newer_year();
        assert_eq!(app.target_year(), 2024);

        app.focus = FormField::SourceYear;
        for _ in 0..100 {
            app.select_older_year();
        }
        assert_eq!(app.source_year(), 2000);
    }

    #[test]
    fn test_minus_sign_is_ignored() {
        let engine = engine();
        let settings = Settings::default();
        let mut app = App::new(&engine, &settings, 2026);

        for c in "-12a,5".chars() {
            app.type_amount_char(c);
        }
        assert_eq!(app.amount.value(), "12,5");
    }

    #[test]
    fn test_calculate_success() {
        let engine = engine();
        let settings = Settings::default();
        let mut app = App::new(&engine, &settings, 2026);

        for c in "1000".chars() {
            app.type_amount_char(c);
        }
        app.focus = FormField::SourceYear;
        for _ in 0..21 {
            app.select_older_year();
        }
        assert_eq!(app.source_year(), 2000);

        app.calculate();
        match &app.outcome {
            Some(Outcome::Converted(view)) => assert_eq!(view.headline, "1 982,69 NOK"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_calculate_rejections() {
        let engine = engine();
        let settings = Settings::default();
        let mut app = App::new(&engine, &settings, 2026);

        app.focus = FormField::TargetYear;
        app.calculate();
        assert_eq!(
            app.outcome,
            Some(Outcome::Rejected(KpiError::InvalidAmount.to_string()))
        );
        assert_eq!(app.focus, FormField::Amount);

        app.type_amount_char('5');
        app.source_index = app.target_index;
        app.calculate();
        assert_eq!(
            app.outcome,
            Some(Outcome::Rejected(KpiError::SameYear.to_string()))
        );
    }
}
