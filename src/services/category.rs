//! Category service
//!
//! Resolves category titles to ids, creating missing categories on the way.
//! Titles match exactly; "Food" and "food" are different categories.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::error::{CashbookError, CashbookResult};
use crate::models::{Category, CategoryId};
use crate::storage::CategoryStore;

/// Service for category resolution and lookup
pub struct CategoryService<'a, C: CategoryStore> {
    categories: &'a C,
}

/// Outcome of resolving a single title
#[derive(Debug, Clone)]
pub struct ResolvedCategory {
    pub category: Category,
    /// Whether the category was created by this call
    pub created: bool,
}

/// Outcome of resolving a batch of titles
#[derive(Debug, Clone, Default)]
pub struct CategoryResolution {
    /// Categories that were already stored
    pub existing: Vec<Category>,
    /// Categories created by this call, in order of first appearance
    pub created: Vec<Category>,
    ids: HashMap<String, CategoryId>,
}

impl CategoryResolution {
    /// The id resolved for `title`, if it was part of the batch
    pub fn id_for(&self, title: &str) -> Option<CategoryId> {
        self.ids.get(title).copied()
    }
}

impl<'a, C: CategoryStore> CategoryService<'a, C> {
    /// Create a new category service
    pub fn new(categories: &'a C) -> Self {
        Self { categories }
    }

    /// List all categories ordered by title
    pub fn list(&self) -> CashbookResult<Vec<Category>> {
        self.categories.find_all()
    }

    /// Find a category by exact title
    pub fn find(&self, title: &str) -> CashbookResult<Option<Category>> {
        self.categories.find_by_title(title.trim())
    }

    /// Find a category by exact title, failing if it does not exist
    pub fn get(&self, title: &str) -> CashbookResult<Category> {
        self.find(title)?
            .ok_or_else(|| CashbookError::category_not_found(title.trim()))
    }

    /// Return the category titled `title`, creating and saving it if absent
    pub fn resolve(&self, title: &str) -> CashbookResult<ResolvedCategory> {
        let title = title.trim();

        if let Some(category) = self.categories.find_by_title(title)? {
            debug!(category = %category.title, id = %category.id, "reusing category");
            return Ok(ResolvedCategory {
                category,
                created: false,
            });
        }

        let category = Category::new(title);
        category
            .validate()
            .map_err(|e| CashbookError::Validation(e.to_string()))?;

        self.categories.save_all(vec![category.clone()])?;
        info!(category = %category.title, id = %category.id, "created category");

        Ok(ResolvedCategory {
            category,
            created: true,
        })
    }

    /// Resolve many titles with one read and one batch write
    ///
    /// Duplicate titles collapse to a single category. The write is issued
    /// even when nothing is missing.
    pub fn resolve_all(&self, titles: &[String]) -> CashbookResult<CategoryResolution> {
        let mut seen: HashSet<&String> = HashSet::new();
        let distinct: Vec<String> = titles
            .iter()
            .filter(|t| seen.insert(*t))
            .cloned()
            .collect();

        let existing = self.categories.find_by_titles(&distinct)?;
        let known: HashSet<&str> = existing.iter().map(|c| c.title.as_str()).collect();

        let created: Vec<Category> = distinct
            .iter()
            .filter(|t| !known.contains(t.as_str()))
            .map(Category::new)
            .collect();

        for category in &created {
            category
                .validate()
                .map_err(|e| CashbookError::Validation(e.to_string()))?;
        }

        self.categories.save_all(created.clone())?;

        let ids = existing
            .iter()
            .chain(created.iter())
            .map(|c| (c.title.clone(), c.id))
            .collect();

        debug!(
            existing = existing.len(),
            created = created.len(),
            "resolved category titles"
        );

        Ok(CategoryResolution {
            existing,
            created,
            ids,
        })
    }
}
