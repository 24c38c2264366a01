//! Category model
//!
//! A category is a named tag for transactions. It is created the first time
//! a transaction refers to its title and never changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A transaction category, unique by title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Human-readable title; matched exactly when resolving
    pub title: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category in memory; it is not persisted until saved
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            title: title.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.title.trim().is_empty() {
            return Err(CategoryValidationError::EmptyTitle);
        }

        if self.title.len() > 100 {
            return Err(CategoryValidationError::TitleTooLong(self.title.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyTitle,
    TitleTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Category title cannot be empty"),
            Self::TitleTooLong(len) => {
                write!(f, "Category title too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Food");
        assert_eq!(category.title, "Food");
        assert_eq!(category.to_string(), "Food");
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_distinct_ids() {
        assert_ne!(Category::new("Food").id, Category::new("Food").id);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Category::new("").validate(),
            Err(CategoryValidationError::EmptyTitle)
        );
        assert_eq!(
            Category::new("x".repeat(101)).validate(),
            Err(CategoryValidationError::TitleTooLong(101))
        );
    }
}
