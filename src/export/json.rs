//! JSON Export functionality
//!
//! Exports conversion results and index tables to JSON with schema
//! versioning metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{KpiError, KpiResult};
use crate::models::{ChangeDirection, ConversionResult, IndexTable};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Metadata carried by every export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,
}

impl ExportMetadata {
    pub fn now() -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Exported conversion result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultExport {
    pub metadata: ExportMetadata,

    #[serde(flatten)]
    pub result: ConversionResult,

    pub direction: ChangeDirection,
}

impl ResultExport {
    pub fn new(result: &ConversionResult) -> Self {
        Self {
            metadata: ExportMetadata::now(),
            result: *result,
            direction: result.direction(),
        }
    }
}

/// Exported index table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableExport {
    pub metadata: ExportMetadata,

    pub first_year: i32,
    pub last_year: i32,
    pub index: IndexTable,
}

impl TableExport {
    pub fn new(table: &IndexTable) -> Self {
        Self {
            metadata: ExportMetadata::now(),
            first_year: table.first_year(),
            last_year: table.last_year(),
            index: table.clone(),
        }
    }
}

/// Export a conversion result as pretty JSON
pub fn export_result_json<W: Write>(result: &ConversionResult, writer: &mut W) -> KpiResult<()> {
    write_pretty(&ResultExport::new(result), writer)
}

/// Export an index table as pretty JSON
pub fn export_table_json<W: Write>(table: &IndexTable, writer: &mut W) -> KpiResult<()> {
    write_pretty(&TableExport::new(table), writer)
}

fn write_pretty<T: Serialize, W: Write>(value: &T, writer: &mut W) -> KpiResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| KpiError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| KpiError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ConversionEngine;

    #[test]
    fn test_result_json_fields() {
        let result = ConversionEngine::new(IndexTable::ssb())
            .convert(1000.0, 2000, 2024)
            .unwrap();

        let mut buffer = Vec::new();
        export_result_json(&result, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["metadata"]["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["request"]["source_year"], 2000);
        assert_eq!(value["request"]["target_year"], 2024);
        assert_eq!(value["source_index"], 52.0);
        assert_eq!(value["target_index"], 103.1);
        assert_eq!(value["direction"], "increase");
        let equivalent = value["equivalent_amount"].as_f64().unwrap();
        assert!((equivalent - 1982.6923).abs() < 0.001);
    }

    #[test]
    fn test_table_json_reloads() {
        let mut buffer = Vec::new();
        export_table_json(&IndexTable::ssb(), &mut buffer).unwrap();

        let export: TableExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(export.first_year, 2000);
        assert_eq!(export.last_year, 2024);
        assert_eq!(export.index, IndexTable::ssb());
    }
}
