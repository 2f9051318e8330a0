//! Reusable TUI widgets

pub mod input;
pub mod year_picker;

pub use input::TextInput;
pub use year_picker::YearPicker;
