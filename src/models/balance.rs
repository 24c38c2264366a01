//! Balance summary model
//!
//! The balance is always derived from the stored transactions and is never
//! persisted.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::{Transaction, TransactionType};
use crate::error::{CashbookError, CashbookResult};

/// Income, outcome and their difference across all transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balance {
    pub income: Money,
    pub outcome: Money,
    /// Always `income - outcome`
    pub total: Money,
}

impl Balance {
    /// Add one transaction to the running sums
    pub fn record(&mut self, txn: &Transaction) -> CashbookResult<()> {
        self.apply(txn.transaction_type, txn.value)
    }

    /// Add an amount of the given type to the running sums
    ///
    /// Fails with a validation error, leaving `self` unchanged, if any sum
    /// would leave the representable range.
    pub fn apply(&mut self, kind: TransactionType, value: Money) -> CashbookResult<()> {
        let (income, outcome) = match kind {
            TransactionType::Income => (self.income.checked_add(value), Some(self.outcome)),
            TransactionType::Outcome => (Some(self.income), self.outcome.checked_add(value)),
        };

        *self = Self::from_sums(income, outcome)
            .ok_or_else(|| CashbookError::balance_overflow(value))?;
        Ok(())
    }

    /// Combine two partial balances
    pub fn merge(self, other: Balance) -> CashbookResult<Balance> {
        Self::from_sums(
            self.income.checked_add(other.income),
            self.outcome.checked_add(other.outcome),
        )
        .ok_or_else(|| CashbookError::balance_overflow(other.total))
    }

    fn from_sums(income: Option<Money>, outcome: Option<Money>) -> Option<Balance> {
        let (income, outcome) = (income?, outcome?);
        Some(Balance {
            income,
            outcome,
            total: income.checked_sub(outcome)?,
        })
    }

    /// Whether an outcome of `value` can be taken from this balance
    pub fn covers(&self, value: Money) -> bool {
        value <= self.total
    }
}
