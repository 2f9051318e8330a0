//! CSV Export functionality
//!
//! Writes the index table as `year,index` rows, the same layout the storage
//! layer reads back.

use std::io::Write;

use crate::error::{KpiError, KpiResult};
use crate::models::IndexTable;

/// Export the index table to CSV, oldest year first
pub fn export_table_csv<W: Write>(table: &IndexTable, writer: &mut W) -> KpiResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["year", "index"])
        .map_err(|e| KpiError::Export(e.to_string()))?;

    for (year, index) in table.iter() {
        csv_writer
            .write_record([year.to_string(), index.to_string()])
            .map_err(|e| KpiError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| KpiError::Export(e.to_string()))?;

    Ok(())
}
