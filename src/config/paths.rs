//! Path management for Cashbook
//!
//! ## Path Resolution Order
//!
//! 1. `CASHBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory joined with `cashbook`
//!    (`~/.config/cashbook` on Linux, `%APPDATA%\cashbook` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CashbookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CASHBOOK_DATA_DIR";

/// Manages all paths used by Cashbook
#[derive(Debug, Clone)]
pub struct CashbookPaths {
    /// Base directory for all Cashbook data
    base_dir: PathBuf,
}

impl CashbookPaths {
    /// Create a new CashbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform configuration
    /// directory cannot be determined.
    pub fn new() -> Result<Self, CashbookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CashbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CashbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashbookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CashbookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, CashbookError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CashbookError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("cashbook"))
}
