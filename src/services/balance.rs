//! Balance calculation
//!
//! The balance is a pure fold over the stored transactions. It is recomputed
//! on every request and never cached.

use crate::error::CashbookResult;
use crate::models::{Balance, Transaction};
use crate::storage::TransactionStore;

/// Fold a set of transactions into `{income, outcome, total}`
///
/// An empty slice yields a zero balance. Fails if the sums overflow, which
/// only happens when the stored data was written outside this crate.
pub fn calculate_balance(transactions: &[Transaction]) -> CashbookResult<Balance> {
    transactions
        .iter()
        .try_fold(Balance::default(), |mut balance, txn| {
            balance.record(txn)?;
            Ok(balance)
        })
}

/// Service that reads all transactions and summarises them
pub struct BalanceService<'a, T: TransactionStore> {
    transactions: &'a T,
}

impl<'a, T: TransactionStore> BalanceService<'a, T> {
    pub fn new(transactions: &'a T) -> Self {
        Self { transactions }
    }

    /// Current balance across every stored transaction
    pub fn balance(&self) -> CashbookResult<Balance> {
        let transactions = self.transactions.find_all()?;
        calculate_balance(&transactions)
    }
}
