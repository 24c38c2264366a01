//! Transaction display formatting
//!
//! Renders the transaction listing as a table and single transactions as a
//! detail block.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Category, Transaction, TransactionType};
use crate::services::{calculate_balance, ImportSummary, TransactionWithCategory};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn category_title(category: Option<&Category>) -> &str {
    category.map(|c| c.title.as_str()).unwrap_or("(unknown)")
}

/// Format a signed amount: outcomes are shown negative
fn signed_value(txn: &Transaction, symbol: &str) -> String {
    match txn.transaction_type {
        TransactionType::Income => txn.value.format_with_symbol(symbol),
        TransactionType::Outcome => format!("-{}", txn.value.format_with_symbol(symbol)),
    }
}

/// Format transactions as a table
pub fn format_transaction_table(transactions: &[TransactionWithCategory], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|entry| {
        let txn = &entry.transaction;
        TransactionRow {
            id: txn.id.to_string(),
            date: txn.created_at.format("%Y-%m-%d").to_string(),
            title: txn.title.clone(),
            category: category_title(entry.category.as_ref()).to_string(),
            kind: txn.transaction_type.to_string(),
            value: signed_value(txn, symbol),
        }
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, category: Option<&Category>, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Value:       {}\n", txn.value.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", category_title(category)));
    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// Format the result of a CSV import
pub fn format_import_summary(summary: &ImportSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Imported {} transaction(s)\n", summary.imported()));

    if !summary.created_categories.is_empty() {
        let titles: Vec<&str> = summary
            .created_categories
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        output.push_str(&format!("  New categories:    {}\n", titles.join(", ")));
    }
    if !summary.reused_categories.is_empty() {
        let titles: Vec<&str> = summary
            .reused_categories
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        output.push_str(&format!("  Reused categories: {}\n", titles.join(", ")));
    }

    if let Ok(imported) = calculate_balance(&summary.transactions) {
        output.push_str(&format!(
            "  Imported income:   {}
",
            imported.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "  Imported outcome:  {}
",
            imported.outcome.format_with_symbol(symbol)
        ));
    }

    output
}
