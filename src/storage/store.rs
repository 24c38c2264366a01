//! Persistence traits the services are written against
//!
//! Services receive a transaction store and a category store at
//! construction. The JSON repositories implement both; tests can supply
//! their own implementations.

use crate::error::CashbookResult;
use crate::models::{Category, Transaction, TransactionId};

/// Read and batch-write access to transactions
pub trait TransactionStore {
    /// All transactions in insertion order
    fn find_all(&self) -> CashbookResult<Vec<Transaction>>;

    /// Look up a single transaction
    fn find(&self, id: TransactionId) -> CashbookResult<Option<Transaction>>;

    /// Persist a batch of new transactions in one write
    fn save_all(&self, transactions: Vec<Transaction>) -> CashbookResult<()>;
}

/// Read and batch-write access to categories
pub trait CategoryStore {
    /// All categories, ordered by title
    fn find_all(&self) -> CashbookResult<Vec<Category>>;

    /// Exact-title lookup
    fn find_by_title(&self, title: &str) -> CashbookResult<Option<Category>>;

    /// Every stored category whose title is in `titles`, in one read
    fn find_by_titles(&self, titles: &[String]) -> CashbookResult<Vec<Category>>;

    /// Persist a batch of new categories in one write
    ///
    /// Fails without writing anything if a title is already taken.
    fn save_all(&self, categories: Vec<Category>) -> CashbookResult<()>;
}
