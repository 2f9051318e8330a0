//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the conversion engine.

pub mod convert;
pub mod table;

pub use convert::{handle_convert_command, ConvertArgs, OutputFormat};
pub use table::{handle_table_command, ExportFormat, TableCommands};
