//! Index table files
//!
//! Tables can be stored as JSON or YAML maps of year to index value, or as
//! CSV with a `year,index` header. A document written by `kpi table export`
//! is accepted too: its table sits under the `index` key. Every loaded table
//! goes through `IndexTable::new`, so file contents are held to the same
//! invariants as the built-in table.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{KpiError, KpiResult};
use crate::models::IndexTable;

/// Key under which exported documents carry the table
const EXPORTED_TABLE_KEY: &str = "index";

/// Supported table file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
    Csv,
}

impl TableFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> KpiResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("csv") => Ok(Self::Csv),
            _ => Err(KpiError::Storage(format!(
                "Unsupported index table format: {} (expected .json, .yaml or .csv)",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IndexRow {
    year: i32,
    index: f64,
}

/// Load an index table from a file, choosing the format by extension
pub fn load_index_table(path: &Path) -> KpiResult<IndexTable> {
    let entries = match TableFormat::from_path(path)? {
        TableFormat::Json => read_json_entries(path)?,
        TableFormat::Yaml => read_yaml_entries(path)?,
        TableFormat::Csv => read_csv_rows(path)?,
    };

    let table = IndexTable::new(entries)?;
    info!(
        path = %path.display(),
        years = table.len(),
        first = table.first_year(),
        last = table.last_year(),
        "loaded index table"
    );
    Ok(table)
}

/// Write an index table as JSON, atomically
pub fn write_index_table_atomic(path: &Path, table: &IndexTable) -> KpiResult<()> {
    let contents = serde_json::to_vec_pretty(table)
        .map_err(|e| KpiError::Storage(format!("Failed to serialize index table: {}", e)))?;
    write_file_atomic(path, &contents)
}

/// Replace a file's contents without leaving a half-written file behind
///
/// The bytes go to a sibling `<name>.tmp` file, which is synced and then
/// renamed over `path`. Missing parent directories are created.
pub fn write_file_atomic(path: &Path, contents: &[u8]) -> KpiResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            KpiError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, or the rename is not atomic
    let temp_path = temp_path_for(path);

    let mut file = File::create(&temp_path).map_err(|e| {
        KpiError::Storage(format!(
            "Failed to create {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    file.write_all(contents)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            KpiError::Storage(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        KpiError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("kpi"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn open(path: &Path) -> KpiResult<File> {
    File::open(path)
        .map_err(|e| KpiError::Storage(format!("Failed to open {}: {}", path.display(), e)))
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> KpiError {
    KpiError::Storage(format!("Failed to parse {}: {}", path.display(), err))
}

fn read_json_entries(path: &Path) -> KpiResult<BTreeMap<i32, f64>> {
    let mut document: serde_json::Value =
        serde_json::from_reader(BufReader::new(open(path)?)).map_err(|e| parse_error(path, e))?;

    let table = match document
        .get_mut(EXPORTED_TABLE_KEY)
        .map(serde_json::Value::take)
    {
        Some(exported) => exported,
        None => document,
    };

    serde_json::from_value(table).map_err(|e| parse_error(path, e))
}

fn read_yaml_entries(path: &Path) -> KpiResult<BTreeMap<i32, f64>> {
    let mut document: serde_yaml::Value =
        serde_yaml::from_reader(BufReader::new(open(path)?)).map_err(|e| parse_error(path, e))?;

    let table = match document
        .get_mut(EXPORTED_TABLE_KEY)
        .map(|v| std::mem::replace(v, serde_yaml::Value::Null))
    {
        Some(exported) => exported,
        None => document,
    };

    serde_yaml::from_value(table).map_err(|e| parse_error(path, e))
}

fn read_csv_rows(path: &Path) -> KpiResult<BTreeMap<i32, f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(open(path)?);

    let mut entries = BTreeMap::new();
    for row in reader.deserialize() {
        let row: IndexRow = row.map_err(|e| parse_error(path, e))?;
        if entries.insert(row.year, row.index).is_some() {
            return Err(KpiError::InvalidIndexTable(format!(
                "year {} appears more than once",
                row.year
            )));
        }
    }
    Ok(entries)
}
