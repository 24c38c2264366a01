//! Custom error types for Cashbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for Cashbook operations
#[derive(Error, Debug)]
pub enum CashbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for incoming data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An outcome would take the balance below zero
    #[error("Insufficient balance: cannot spend {requested}, only {available} available")]
    InsufficientBalance { requested: Money, available: Money },

    /// Malformed CSV input
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CashbookError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create an import error tied to a line of the CSV input
    pub fn import_at_line(line: u64, message: impl std::fmt::Display) -> Self {
        Self::Import(format!("line {}: {}", line, message))
    }

    /// Create a validation error for an amount the running totals cannot hold
    pub fn balance_overflow(value: Money) -> Self {
        Self::Validation(format!(
            "Balance overflow: {} does not fit in the running totals",
            value
        ))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the balance check rejected the operation
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }

    /// Check if this is an import (malformed input) error
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CashbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CashbookError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(pos) => Self::import_at_line(pos.line(), csv_error_message(&err)),
            None => Self::Import(err.to_string()),
        }
    }
}

/// Message for a csv error without its position prefix
fn csv_error_message(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Io(e) => e.to_string(),
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields, found {}", expected_len, len),
        _ => err.to_string(),
    }
}

/// Result type alias for Cashbook operations
pub type CashbookResult<T> = Result<T, CashbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CashbookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CashbookError::category_not_found("Food");
        assert_eq!(err.to_string(), "Category not found: Food");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_balance_error() {
        let err = CashbookError::InsufficientBalance {
            requested: Money::from_cents(5000),
            available: Money::from_cents(3000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: cannot spend $50.00, only $30.00 available"
        );
        assert!(err.is_insufficient_balance());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_import_at_line() {
        let err = CashbookError::import_at_line(3, "unknown transaction type 'refund'");
        assert_eq!(
            err.to_string(),
            "Import error: line 3: unknown transaction type 'refund'"
        );
        assert!(err.is_import());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cashbook_err: CashbookError = io_err.into();
        assert!(matches!(cashbook_err, CashbookError::Io(_)));
    }
}
