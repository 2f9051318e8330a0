//! Core data models for the KPI calculator
//!
//! The index table and the transient request/result types passed between the
//! conversion engine and the presentation layers.

pub mod conversion;
pub mod index_table;

pub use conversion::{ChangeDirection, ConversionRequest, ConversionResult};
pub use index_table::{IndexTable, TableSource};
