//! Business logic layer
//!
//! The conversion engine sits between the presentation adapters (CLI and
//! TUI) and the index table.

pub mod conversion;

pub use conversion::{parse_amount, ConversionEngine, DEFAULT_LOOKBACK_YEARS, MAX_AMOUNT};
