//! User settings for the KPI calculator
//!
//! Manages display preferences, the default source-year lookback and an
//! optional path to a custom index table.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::KpiPaths;
use crate::error::KpiError;
use crate::services::DEFAULT_LOOKBACK_YEARS;
use crate::storage::write_file_atomic;

/// User settings for the KPI calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code shown after amounts
    #[serde(default = "default_currency")]
    pub currency_code: String,

    /// Decimal separator used when formatting amounts
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Thousands separator used when formatting amounts
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// How many years back from today the source year defaults to
    #[serde(default = "default_lookback_years")]
    pub default_lookback_years: u32,

    /// Custom index table file (JSON, YAML or CSV)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_table: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "NOK".to_string()
}

fn default_decimal_separator() -> char {
    ','
}

fn default_thousands_separator() -> char {
    ' '
}

fn default_lookback_years() -> u32 {
    DEFAULT_LOOKBACK_YEARS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency(),
            decimal_separator: default_decimal_separator(),
            thousands_separator: default_thousands_separator(),
            default_lookback_years: default_lookback_years(),
            index_table: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &KpiPaths) -> Result<Self, KpiError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| KpiError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| KpiError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk, replacing the old file atomically
    pub fn save(&self, paths: &KpiPaths) -> Result<(), KpiError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_vec_pretty(self)
            .map_err(|e| KpiError::Config(format!("Failed to serialize settings: {}", e)))?;

        write_file_atomic(&paths.settings_file(), &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code, "NOK");
        assert_eq!(settings.decimal_separator, ',');
        assert_eq!(settings.thousands_separator, ' ');
        assert_eq!(settings.default_lookback_years, 5);
        assert!(settings.index_table.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_code = "SEK".into();
        settings.default_lookback_years = 10;
        settings.index_table = Some(PathBuf::from("/tmp/kpi.csv"));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_code, "SEK");
        assert_eq!(loaded.default_lookback_years, 10);
        assert_eq!(loaded.index_table, Some(PathBuf::from("/tmp/kpi.csv")));
        assert!(!temp_dir.path().join("config.json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_previous_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_code = "EUR".into();
        settings.save(&paths).unwrap();
        settings.currency_code = "NOK".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_code, "NOK");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_code": "EUR"}"#).unwrap();
        assert_eq!(settings.currency_code, "EUR");
        assert_eq!(settings.decimal_separator, ',');
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KpiPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, KpiError::Config(_)));
    }
}
