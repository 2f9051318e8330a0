//! Export module for the KPI calculator
//!
//! - CSV: the index table, in the format `kpi` can load again
//! - JSON: conversion results and the index table, machine-readable
//! - YAML: the same content as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_table_csv;
pub use json::{
    export_result_json, export_table_json, ExportMetadata, ResultExport, TableExport,
    EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_result_yaml, export_table_yaml};
