//! Terminal User Interface module
//!
//! An interactive conversion form built on ratatui: an amount field, source
//! and target year selectors, and a result panel.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
