//! Storage layer for index tables
//!
//! Resolves which index table is active and reads/writes table files.

pub mod index_file;

pub use index_file::{load_index_table, write_file_atomic, write_index_table_atomic, TableFormat};

use tracing::debug;

use crate::config::{KpiPaths, Settings};
use crate::error::KpiResult;
use crate::models::{IndexTable, TableSource};

/// Resolve the active index table
///
/// Order: the table configured in settings, then `index.json` in the data
/// directory, then the built-in table. A configured table that fails to
/// load is an error rather than a silent fallback. A relative configured
/// path is taken relative to the data directory.
pub fn load_active_table(
    paths: &KpiPaths,
    settings: &Settings,
) -> KpiResult<(IndexTable, TableSource)> {
    if let Some(configured) = &settings.index_table {
        let path = paths.base_dir().join(configured);
        let table = load_index_table(&path)?;
        return Ok((table, TableSource::File(path)));
    }

    let local = paths.index_file();
    if local.exists() {
        let table = load_index_table(&local)?;
        return Ok((table, TableSource::File(local)));
    }

    debug!("no index table file found, using built-in table");
    Ok((IndexTable::ssb(), TableSource::BuiltIn))
}

/// Write the built-in table to the data directory so it can be edited
pub fn initialize_storage(paths: &KpiPaths) -> KpiResult<()> {
    paths.ensure_directories()?;
    let index_file = paths.index_file();
    if !index_file.exists() {
        write_index_table_atomic(&index_file, &IndexTable::ssb())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_when_nothing_configured() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let (table, source) = load_active_table(&paths, &Settings::default()).unwrap();
        assert_eq!(source, TableSource::BuiltIn);
        assert_eq!(table, IndexTable::ssb());
    }

    #[test]
    fn test_local_index_file_used_after_init() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        let (table, source) = load_active_table(&paths, &Settings::default()).unwrap();
        assert_eq!(source, TableSource::File(paths.index_file()));
        assert_eq!(table.len(), 25);
    }

    #[test]
    fn test_settings_table_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let custom = temp_dir.path().join("custom.csv");
        fs::write(&custom, "year,index\n1990,40.0\n1991,41.0\n").unwrap();

        let settings = Settings {
            index_table: Some(custom.clone()),
            ..Settings::default()
        };

        let (table, source) = load_active_table(&paths, &settings).unwrap();
        assert_eq!(source, TableSource::File(custom));
        assert_eq!(table.years(), vec![1990, 1991]);
    }

    #[test]
    fn test_relative_settings_table_resolves_against_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().join("data"));
        paths.ensure_directories().unwrap();
        fs::write(
            paths.base_dir().join("custom.csv"),
            "year,index\n1990,40.0\n1991,41.0\n",
        )
        .unwrap();

        let settings = Settings {
            index_table: Some(PathBuf::from("custom.csv")),
            ..Settings::default()
        };

        let (table, source) = load_active_table(&paths, &settings).unwrap();
        assert_eq!(source, TableSource::File(paths.base_dir().join("custom.csv")));
        assert_eq!(table.years(), vec![1990, 1991]);
    }

    #[test]
    fn test_exported_table_in_data_dir_still_loads() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let mut file = fs::File::create(paths.index_file()).unwrap();
        crate::export::export_table_json(&IndexTable::ssb(), &mut file).unwrap();
        drop(file);

        let (table, _) = load_active_table(&paths, &Settings::default()).unwrap();
        assert_eq!(table, IndexTable::ssb());
    }

    #[test]
    fn test_broken_configured_table_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            index_table: Some(temp_dir.path().join("missing.json")),
            ..Settings::default()
        };

        assert!(load_active_table(&paths, &settings).is_err());
    }

    #[test]
    fn test_init_keeps_existing_index_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        fs::write(paths.index_file(), r#"{"2000": 1.0}"#).unwrap();

        initialize_storage(&paths).unwrap();
        let (table, _) = load_active_table(&paths, &Settings::default()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
