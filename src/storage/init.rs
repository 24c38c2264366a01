//! Storage initialization
//!
//! Handles first-run setup. Categories are created lazily by transactions,
//! so a fresh installation starts with empty data files.

use crate::config::paths::CashbookPaths;
use crate::error::CashbookResult;

use super::categories::CategoryData;
use super::file_io::write_json_atomic;
use super::transactions::TransactionData;

/// Initialize storage for a fresh installation
///
/// Existing data files are left untouched.
pub fn initialize_storage(paths: &CashbookPaths) -> CashbookResult<()> {
    paths.ensure_directories()?;

    if !paths.transactions_file().exists() {
        write_json_atomic(paths.transactions_file(), &TransactionData::default())?;
    }

    if !paths.categories_file().exists() {
        write_json_atomic(paths.categories_file(), &CategoryData::default())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &CashbookPaths) -> bool {
    !paths.transactions_file().exists() || !paths.categories_file().exists()
}
