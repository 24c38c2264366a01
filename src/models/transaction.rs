//! Transaction model
//!
//! A transaction moves money in (income) or out (outcome) of the single
//! shared balance and is tagged with one category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in; increases the balance
    Income,
    /// Money going out; decreases the balance
    Outcome,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Outcome => write!(f, "outcome"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// A recorded income or outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Short description ("Groceries", "Salary")
    pub title: String,

    /// Non-negative amount; the direction comes from `transaction_type`
    pub value: Money,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// The category this transaction is tagged with
    pub category_id: CategoryId,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        title: impl Into<String>,
        value: Money,
        transaction_type: TransactionType,
        category_id: CategoryId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            title: title.into(),
            value,
            transaction_type,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_outcome(&self) -> bool {
        self.transaction_type == TransactionType::Outcome
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        if self.value.is_negative() {
            return Err(TransactionValidationError::NegativeValue(self.value));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.title, self.transaction_type, self.value)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    NegativeValue(Money),
    UnknownType(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Transaction title cannot be empty"),
            Self::NegativeValue(value) => {
                write!(f, "Transaction value cannot be negative: {}", value)
            }
            Self::UnknownType(t) => write!(
                f,
                "Unknown transaction type '{}' (expected 'income' or 'outcome')",
                t
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let category_id = CategoryId::new();
        let txn = Transaction::new(
            "Groceries",
            Money::from_cents(5000),
            TransactionType::Outcome,
            category_id,
        );

        assert_eq!(txn.title, "Groceries");
        assert_eq!(txn.value.cents(), 5000);
        assert!(txn.is_outcome());
        assert!(!txn.is_income());
        assert_eq!(txn.category_id, category_id);
        assert_eq!(txn.created_at, txn.updated_at);
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!(
            "income".parse::<TransactionType>().unwrap(),
            TransactionType::Income
        );
        assert_eq!(
            " Outcome ".parse::<TransactionType>().unwrap(),
            TransactionType::Outcome
        );
        assert_eq!(
            "refund".parse::<TransactionType>(),
            Err(TransactionValidationError::UnknownType("refund".into()))
        );
    }

    #[test]
    fn test_validation() {
        let category_id = CategoryId::new();

        let txn = Transaction::new("  ", Money::zero(), TransactionType::Income, category_id);
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyTitle));

        let txn = Transaction::new(
            "Refund",
            Money::from_cents(-100),
            TransactionType::Income,
            category_id,
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeValue(_))
        ));

        let txn = Transaction::new(
            "Salary",
            Money::from_units(2000),
            TransactionType::Income,
            category_id,
        );
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_serialization_uses_type_field() {
        let txn = Transaction::new(
            "Salary",
            Money::from_units(2000),
            TransactionType::Income,
            CategoryId::new(),
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["value"], 200000);

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}
