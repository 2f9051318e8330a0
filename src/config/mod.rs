//! Configuration module for the KPI calculator
//!
//! - Path resolution for settings and index tables
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KpiPaths;
pub use settings::Settings;
