//! YAML Export functionality

use std::io::Write;

use crate::error::{KpiError, KpiResult};
use crate::export::json::{ResultExport, TableExport};
use crate::models::{ConversionResult, IndexTable};

/// Export a conversion result as YAML
pub fn export_result_yaml<W: Write>(result: &ConversionResult, writer: &mut W) -> KpiResult<()> {
    serde_yaml::to_writer(writer, &ResultExport::new(result))
        .map_err(|e| KpiError::Export(e.to_string()))
}

/// Export an index table as YAML
pub fn export_table_yaml<W: Write>(table: &IndexTable, writer: &mut W) -> KpiResult<()> {
    let export = TableExport::new(table);

    writeln!(writer, "# Consumer price index table")
        .map_err(|e| KpiError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.metadata.exported_at)
        .map_err(|e| KpiError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| KpiError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| KpiError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ConversionEngine;

    #[test]
    fn test_result_yaml() {
        let result = ConversionEngine::new(IndexTable::ssb())
            .convert(500.0, 2010, 2020)
            .unwrap();

        let mut buffer = Vec::new();
        export_result_yaml(&result, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.contains("source_year: 2010"));
        assert!(yaml.contains("direction: increase"));
    }

    #[test]
    fn test_table_yaml_reloads() {
        let mut buffer = Vec::new();
        export_table_yaml(&IndexTable::ssb(), &mut buffer).unwrap();

        let export: TableExport = serde_yaml::from_slice(&buffer).unwrap();
        assert_eq!(export.index, IndexTable::ssb());
    }
}
