//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Transactions
//! are append-only, so the repository keeps them in insertion order.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{CashbookError, CashbookResult};
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::store::TransactionStore;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TransactionData {
    pub transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> CashbookResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            CashbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.transactions;

        debug!(count = data.len(), path = %self.path.display(), "loaded transactions");
        Ok(())
    }

    /// Count transactions
    pub fn count(&self) -> CashbookResult<usize> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

impl TransactionStore for TransactionRepository {
    fn find_all(&self) -> CashbookResult<Vec<Transaction>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    fn find(&self, id: TransactionId) -> CashbookResult<Option<Transaction>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    fn save_all(&self, transactions: Vec<Transaction>) -> CashbookResult<()> {
        let mut data = self.data.write().map_err(|e| {
            CashbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut seen: HashSet<TransactionId> = data.iter().map(|t| t.id).collect();
        for txn in &transactions {
            if !seen.insert(txn.id) {
                return Err(CashbookError::Storage(format!(
                    "Transaction {} already exists",
                    txn.id
                )));
            }
        }

        // Memory is only updated once the file write has succeeded
        let mut snapshot = TransactionData {
            transactions: data.clone(),
        };
        snapshot.transactions.extend(transactions);
        write_json_atomic(&self.path, &snapshot)?;
        *data = snapshot.transactions;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, TransactionType};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn outcome(title: &str, cents: i64) -> Transaction {
        Transaction::new(
            title,
            Money::from_cents(cents),
            TransactionType::Outcome,
            CategoryId::new(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_all_keeps_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.save_all(vec![outcome("First", 100), outcome("Second", 200)])
            .unwrap();
        repo.save_all(vec![outcome("Third", 300)]).unwrap();

        let titles: Vec<_> = repo
            .find_all()
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_find() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = outcome("Coffee", 450);
        let id = txn.id;
        repo.save_all(vec![txn]).unwrap();

        assert_eq!(repo.find(id).unwrap().unwrap().value.cents(), 450);
        assert!(repo.find(TransactionId::new()).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = outcome("Rent", 120000);
        let id = txn.id;
        repo.save_all(vec![txn]).unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.find(id).unwrap().unwrap().title, "Rent");
    }

    #[test]
    fn test_duplicate_id_rejected_without_writing() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = outcome("Coffee", 450);
        repo.save_all(vec![txn.clone()]).unwrap();

        let result = repo.save_all(vec![outcome("Tea", 300), txn]);
        assert!(matches!(result, Err(CashbookError::Storage(_))));
        assert_eq!(repo.count().unwrap(), 1);
    }
}
