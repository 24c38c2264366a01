//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nCategories are created when a transaction uses them.\n"
            .to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        title: c.title.clone(),
        id: c.id.to_string(),
        created: c.created_at.format("%Y-%m-%d").to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert!(format_category_list(&[]).starts_with("No categories found."));
    }

    #[test]
    fn test_list_contains_titles() {
        let output = format_category_list(&[Category::new("Food"), Category::new("Work")]);
        assert!(output.contains("Food"));
        assert!(output.contains("Work"));
        assert!(output.contains("cat-"));
    }
}
