//! KPI calculator - convert amounts between years using a consumer price index
//!
//! Given an amount and two years, the calculator looks up the consumer price
//! index (konsumprisindeks, KPI) for both years and reports what the amount
//! is worth in the other year's prices, together with the percentage change.
//!
//! # Architecture
//!
//! - `models`: the validated `IndexTable` and the conversion request/result types
//! - `services`: the pure `ConversionEngine`
//! - `storage`: loading index tables from JSON, YAML or CSV
//! - `config`: path resolution and user settings
//! - `display`: number formatting and terminal layouts
//! - `export`: JSON, YAML and CSV output
//! - `cli`: clap command handlers
//! - `tui`: the interactive form
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use kpi_calc::models::IndexTable;
//! use kpi_calc::services::ConversionEngine;
//!
//! let engine = ConversionEngine::new(IndexTable::ssb());
//! let result = engine.convert(1000.0, 2000, 2024).unwrap();
//! assert!((result.equivalent_amount - 1982.69).abs() < 0.01);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{KpiError, KpiResult};
