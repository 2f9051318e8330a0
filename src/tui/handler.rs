//! Event handler for the TUI
//!
//! Routes keyboard events to the form based on which field has focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, FormField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        // Terminal will redraw on the next loop iteration
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Global keys (work in every field)
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Enter => {
            app.calculate();
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_previous();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        FormField::Amount => handle_amount_key(app, key),
        FormField::SourceYear | FormField::TargetYear => handle_year_key(app, key),
    }

    Ok(())
}

fn handle_amount_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.type_amount_char(c),
        KeyCode::Backspace => app.amount.backspace(),
        KeyCode::Delete => app.amount.delete(),
        KeyCode::Left => app.amount.move_left(),
        KeyCode::Right => app.amount.move_right(),
        KeyCode::Home => app.amount.move_start(),
        KeyCode::End => app.amount.move_end(),
        KeyCode::Down => app.focus_next(),
        _ => {}
    }
}

fn handle_year_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Up | KeyCode::Right | KeyCode::Char('k') | KeyCode::Char('l') => {
            app.select_newer_year()
        }
        KeyCode::Down | KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('h') => {
            app.select_older_year()
        }
        _ => {}
    }
}
