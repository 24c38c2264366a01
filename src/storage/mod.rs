//! Storage layer for Cashbook
//!
//! Provides the store traits the services depend on and their JSON file
//! implementations with atomic batch writes.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod store;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use store::{CategoryStore, TransactionStore};
pub use transactions::TransactionRepository;

use crate::config::paths::CashbookPaths;
use crate::error::CashbookResult;

/// Main storage coordinator that owns both repositories
pub struct Storage {
    paths: CashbookPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CashbookPaths) -> CashbookResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CashbookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> CashbookResult<()> {
        self.transactions.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        !init::needs_initialization(&self.paths)
    }
}
