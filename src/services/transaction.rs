//! Transaction service
//!
//! Creates single transactions. Outcomes are checked against the current
//! balance before anything is written.

use tracing::{info, warn};

use crate::error::{CashbookError, CashbookResult};
use crate::models::{Balance, Category, Money, Transaction, TransactionId, TransactionType};
use crate::services::balance::BalanceService;
use crate::services::category::CategoryService;
use crate::storage::{CategoryStore, TransactionStore};

/// Service for transaction management
pub struct TransactionService<'a, T: TransactionStore, C: CategoryStore> {
    transactions: &'a T,
    categories: &'a C,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub value: Money,
    pub transaction_type: TransactionType,
    /// Category title; created if it does not exist yet
    pub category: String,
}

impl CreateTransactionInput {
    pub fn new(
        title: impl Into<String>,
        value: Money,
        transaction_type: TransactionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value,
            transaction_type,
            category: category.into(),
        }
    }
}

/// A transaction paired with its category
#[derive(Debug, Clone)]
pub struct TransactionWithCategory {
    pub transaction: Transaction,
    pub category: Option<Category>,
}

impl<'a, T: TransactionStore, C: CategoryStore> TransactionService<'a, T, C> {
    /// Create a new transaction service
    pub fn new(transactions: &'a T, categories: &'a C) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    /// Create a new transaction
    ///
    /// Outcomes larger than the current total are rejected with
    /// [`CashbookError::InsufficientBalance`]; an outcome equal to the total
    /// is accepted. Any value that would overflow the running totals is a
    /// validation error. Nothing is persisted when a check fails.
    pub fn create(&self, input: CreateTransactionInput) -> CashbookResult<Transaction> {
        let title = input.title.trim();
        let category_title = input.category.trim();

        if title.is_empty() {
            return Err(CashbookError::Validation(
                "Transaction title cannot be empty".into(),
            ));
        }
        if category_title.is_empty() {
            return Err(CashbookError::Validation(
                "Category title cannot be empty".into(),
            ));
        }
        if !input.value.is_positive() {
            return Err(CashbookError::Validation(format!(
                "Transaction value must be positive, got {}",
                input.value
            )));
        }

        let mut balance = self.balance()?;
        if input.transaction_type == TransactionType::Outcome && !balance.covers(input.value) {
            warn!(
                requested = %input.value,
                available = %balance.total,
                "rejected outcome: insufficient balance"
            );
            return Err(CashbookError::InsufficientBalance {
                requested: input.value,
                available: balance.total,
            });
        }
        balance.apply(input.transaction_type, input.value)?;

        let category = CategoryService::new(self.categories)
            .resolve(category_title)?
            .category;

        let txn = Transaction::new(title, input.value, input.transaction_type, category.id);
        txn.validate()
            .map_err(|e| CashbookError::Validation(e.to_string()))?;

        self.transactions.save_all(vec![txn.clone()])?;

        info!(
            id = %txn.id,
            title = %txn.title,
            kind = %txn.transaction_type,
            value = %txn.value,
            category = %category.title,
            "created transaction"
        );

        Ok(txn)
    }

    /// Current balance
    pub fn balance(&self) -> CashbookResult<Balance> {
        BalanceService::new(self.transactions).balance()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> CashbookResult<Transaction> {
        self.transactions
            .find(id)?
            .ok_or_else(|| CashbookError::transaction_not_found(id.to_string()))
    }

    /// Find a transaction by full ID or by the short form shown in listings
    /// (`txn-1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> CashbookResult<Transaction> {
        let identifier = identifier.trim();
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.get(id);
        }

        let mut matches = self
            .transactions
            .find_all()?
            .into_iter()
            .filter(|t| t.id.matches_short(identifier));

        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (Some(_), Some(_)) => Err(CashbookError::Validation(format!(
                "Transaction ID '{}' is ambiguous",
                identifier
            ))),
            _ => Err(CashbookError::transaction_not_found(identifier)),
        }
    }

    /// All transactions with their categories, optionally limited to one
    /// category title
    pub fn list(&self, category: Option<&str>) -> CashbookResult<Vec<TransactionWithCategory>> {
        let categories = self.categories.find_all()?;

        let filter = match category {
            Some(title) => Some(CategoryService::new(self.categories).get(title)?.id),
            None => None,
        };

        Ok(self
            .transactions
            .find_all()?
            .into_iter()
            .filter(|t| filter.map_or(true, |id| t.category_id == id))
            .map(|transaction| {
                let category = categories
                    .iter()
                    .find(|c| c.id == transaction.category_id)
                    .cloned();
                TransactionWithCategory {
                    transaction,
                    category,
                }
            })
            .collect())
    }
}
