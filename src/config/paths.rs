//! Path management for the KPI calculator
//!
//! ## Path Resolution Order
//!
//! 1. `KPI_CALC_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/kpi-calc` on Linux,
//!    `~/Library/Application Support/kpi-calc` on macOS, `%APPDATA%\kpi-calc`
//!    on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::KpiError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "KPI_CALC_DATA_DIR";

/// Manages all paths used by the KPI calculator
#[derive(Debug, Clone)]
pub struct KpiPaths {
    /// Base directory for settings and index tables
    base_dir: PathBuf,
}

impl KpiPaths {
    /// Create a new KpiPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, KpiError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KpiPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the user-editable index table
    pub fn index_file(&self) -> PathBuf {
        self.base_dir.join("index.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), KpiError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KpiError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if `kpi init` has been run (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, KpiError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| KpiError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("kpi-calc"))
}
