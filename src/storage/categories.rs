//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json, with an exact
//! title index backing the uniqueness of category titles.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{CashbookError, CashbookResult};
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};
use super::store::CategoryStore;

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

#[derive(Default)]
struct CategoryIndex {
    categories: HashMap<CategoryId, Category>,
    by_title: HashMap<String, CategoryId>,
}

impl CategoryIndex {
    fn insert(&mut self, category: Category) {
        self.by_title.insert(category.title.clone(), category.id);
        self.categories.insert(category.id, category);
    }

    fn sorted(&self) -> Vec<Category> {
        let mut list: Vec<_> = self.categories.values().cloned().collect();
        list.sort_by(|a, b| a.title.cmp(&b.title));
        list
    }
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    index: RwLock<CategoryIndex>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            index: RwLock::new(CategoryIndex::default()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> CashbookResult<()> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut index = self
            .index
            .write()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *index = CategoryIndex::default();
        for category in file_data.categories {
            index.insert(category);
        }

        debug!(count = index.categories.len(), path = %self.path.display(), "loaded categories");
        Ok(())
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> CashbookResult<Option<Category>> {
        let index = self
            .index
            .read()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(index.categories.get(&id).cloned())
    }

    /// Count categories
    pub fn count(&self) -> CashbookResult<usize> {
        let index = self
            .index
            .read()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(index.categories.len())
    }
}

impl CategoryStore for CategoryRepository {
    fn find_all(&self) -> CashbookResult<Vec<Category>> {
        let index = self
            .index
            .read()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(index.sorted())
    }

    fn find_by_title(&self, title: &str) -> CashbookResult<Option<Category>> {
        let index = self
            .index
            .read()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(index
            .by_title
            .get(title)
            .and_then(|id| index.categories.get(id))
            .cloned())
    }

    fn find_by_titles(&self, titles: &[String]) -> CashbookResult<Vec<Category>> {
        let index = self
            .index
            .read()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut found: Vec<Category> = Vec::new();
        for title in titles {
            if let Some(category) = index
                .by_title
                .get(title.as_str())
                .and_then(|id| index.categories.get(id))
            {
                if !found.iter().any(|c| c.id == category.id) {
                    found.push(category.clone());
                }
            }
        }

        Ok(found)
    }

    fn save_all(&self, categories: Vec<Category>) -> CashbookResult<()> {
        let mut index = self
            .index
            .write()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut batch_titles: HashMap<&str, CategoryId> = HashMap::new();
        for category in &categories {
            let taken = index
                .by_title
                .get(category.title.as_str())
                .or_else(|| batch_titles.get(category.title.as_str()))
                .is_some();
            if taken || index.categories.contains_key(&category.id) {
                return Err(CashbookError::Storage(format!(
                    "Category '{}' already exists",
                    category.title
                )));
            }
            batch_titles.insert(category.title.as_str(), category.id);
        }

        let mut snapshot = CategoryData {
            categories: index.sorted(),
        };
        snapshot.categories.extend(categories.iter().cloned());
        snapshot.categories.sort_by(|a, b| a.title.cmp(&b.title));
        write_json_atomic(&self.path, &snapshot)?;

        for category in categories {
            index.insert(category);
        }

        Ok(())
    }
}
