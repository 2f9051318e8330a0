//! Display formatting for terminal output
//!
//! Provides number formatting and text layouts for conversion results and
//! the index table.

pub mod conversion;
pub mod format;
pub mod table;

pub use conversion::{format_conversion, ConversionView};
pub use format::{format_amount, format_index, format_money, format_percentage};
pub use table::format_index_table;
