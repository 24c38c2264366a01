//! User settings for Cashbook
//!
//! Manages display preferences, the default log filter and the CSV import
//! format.

use serde::{Deserialize, Serialize};

use super::paths::CashbookPaths;
use crate::error::CashbookError;
use crate::services::import::ImportFormat;

/// User settings for Cashbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// CSV layout expected by `cashbook import`
    #[serde(default)]
    pub import: ImportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "cashbook=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            log_filter: default_log_filter(),
            import: ImportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &CashbookPaths) -> Result<Self, CashbookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CashbookError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| CashbookError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashbookPaths) -> Result<(), CashbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CashbookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CashbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
