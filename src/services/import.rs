//! CSV Import service
//!
//! Imports a batch of transactions from CSV. Rows are positional:
//! `title, type, value, category`. The whole file is decoded and projected
//! onto the current balance before anything is written; categories are then
//! resolved with one read and one batch write, and the transactions are saved
//! in a second batch write.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CashbookError, CashbookResult};
use crate::models::{Balance, Category, Money, Transaction, TransactionType};
use crate::services::balance::BalanceService;
use crate::services::category::CategoryService;
use crate::storage::{CategoryStore, TransactionStore};

/// Number of positional columns in an import row
const COLUMN_COUNT: usize = 4;

/// CSV layout configuration for import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFormat {
    /// 1-based line of the first data row; earlier lines are ignored
    #[serde(default = "default_first_data_line")]
    pub first_data_line: u64,

    /// Field delimiter (must be ASCII)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Skip rows with an empty required field instead of failing the import
    #[serde(default = "default_skip_empty_rows")]
    pub skip_empty_rows: bool,
}

fn default_first_data_line() -> u64 {
    2
}

fn default_delimiter() -> char {
    ','
}

fn default_skip_empty_rows() -> bool {
    true
}

impl Default for ImportFormat {
    fn default() -> Self {
        Self {
            first_data_line: default_first_data_line(),
            delimiter: default_delimiter(),
            skip_empty_rows: default_skip_empty_rows(),
        }
    }
}

impl ImportFormat {
    /// Set the first data line
    pub fn with_first_data_line(mut self, line: u64) -> Self {
        self.first_data_line = line;
        self
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether rows with empty required fields are skipped
    pub fn with_skip_empty_rows(mut self, skip: bool) -> Self {
        self.skip_empty_rows = skip;
        self
    }

    fn delimiter_byte(&self) -> CashbookResult<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                CashbookError::Config(format!(
                    "CSV delimiter must be a single ASCII character, got '{}'",
                    self.delimiter
                ))
            })
    }
}

/// A decoded CSV row, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTransaction {
    /// 1-based line the row started on
    pub line: u64,
    pub title: String,
    pub transaction_type: TransactionType,
    pub value: Money,
    /// Category title as written in the file
    pub category: String,
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Transactions saved, in file order
    pub transactions: Vec<Transaction>,
    /// Categories created by this import
    pub created_categories: Vec<Category>,
    /// Categories that already existed and were reused
    pub reused_categories: Vec<Category>,
    /// Balance after the import
    pub balance: Balance,
}

impl ImportSummary {
    /// Number of imported transactions
    pub fn imported(&self) -> usize {
        self.transactions.len()
    }
}

/// Service for CSV import
pub struct ImportService<'a, T: TransactionStore, C: CategoryStore> {
    transactions: &'a T,
    categories: &'a C,
    format: ImportFormat,
}

impl<'a, T: TransactionStore, C: CategoryStore> ImportService<'a, T, C> {
    /// Create a new import service using the default format
    pub fn new(transactions: &'a T, categories: &'a C) -> Self {
        Self {
            transactions,
            categories,
            format: ImportFormat::default(),
        }
    }

    /// Use a custom CSV format
    pub fn with_format(mut self, format: ImportFormat) -> Self {
        self.format = format;
        self
    }

    /// Decode CSV content into rows without touching storage
    pub fn parse_csv(&self, content: &[u8]) -> CashbookResult<Vec<ParsedTransaction>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(self.format.delimiter_byte()?)
            .from_reader(content);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if line < self.format.first_data_line {
                continue;
            }

            if let Some(row) = self.parse_record(&record, line)? {
                rows.push(row);
            }
        }

        Ok(rows)
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        line: u64,
    ) -> CashbookResult<Option<ParsedTransaction>> {
        if record.iter().all(str::is_empty) && self.format.skip_empty_rows {
            debug!(line, "skipping blank row");
            return Ok(None);
        }

        if record.len() != COLUMN_COUNT {
            return Err(CashbookError::import_at_line(
                line,
                format!(
                    "expected {} columns (title, type, value, category), found {}",
                    COLUMN_COUNT,
                    record.len()
                ),
            ));
        }

        let title = &record[0];
        let kind = &record[1];
        let value = &record[2];
        let category = &record[3];

        if [title, kind, value, category].iter().any(|f| f.is_empty()) {
            if self.format.skip_empty_rows {
                debug!(line, "skipping row with empty required field");
                return Ok(None);
            }
            return Err(CashbookError::import_at_line(
                line,
                "title, type, value and category are all required",
            ));
        }

        let transaction_type = kind
            .parse::<TransactionType>()
            .map_err(|e| CashbookError::import_at_line(line, e))?;

        let value = Money::parse(value).map_err(|e| CashbookError::import_at_line(line, e))?;
        if value.is_negative() {
            return Err(CashbookError::import_at_line(
                line,
                format!("value cannot be negative: {}", value),
            ));
        }

        Ok(Some(ParsedTransaction {
            line,
            title: title.to_string(),
            transaction_type,
            value,
            category: category.to_string(),
        }))
    }

    /// Import CSV content
    ///
    /// Issues exactly one category read and two batch writes. Imported
    /// outcomes may take the total below zero, but a batch whose values would
    /// overflow the running totals is rejected before any write.
    pub fn import(&self, content: &[u8]) -> CashbookResult<ImportSummary> {
        let rows = self.parse_csv(content)?;

        let mut balance = BalanceService::new(self.transactions).balance()?;
        for row in &rows {
            balance
                .apply(row.transaction_type, row.value)
                .map_err(|_| {
                    CashbookError::import_at_line(
                        row.line,
                        format!("value {} would overflow the running totals", row.value),
                    )
                })?;
        }

        let titles: Vec<String> = rows.iter().map(|row| row.category.clone()).collect();
        let resolution = CategoryService::new(self.categories).resolve_all(&titles)?;

        let transactions = rows
            .into_iter()
            .map(|row| {
                let category_id = resolution
                    .id_for(&row.category)
                    .ok_or_else(|| CashbookError::category_not_found(row.category.as_str()))?;
                Ok(Transaction::new(
                    row.title,
                    row.value,
                    row.transaction_type,
                    category_id,
                ))
            })
            .collect::<CashbookResult<Vec<_>>>()?;

        self.transactions.save_all(transactions.clone())?;

        info!(
            transactions = transactions.len(),
            created_categories = resolution.created.len(),
            reused_categories = resolution.existing.len(),
            total = %balance.total,
            "import complete"
        );

        Ok(ImportSummary {
            transactions,
            created_categories: resolution.created,
            reused_categories: resolution.existing,
            balance,
        })
    }

    /// Import a CSV file from disk
    pub fn import_file(&self, path: &Path) -> CashbookResult<ImportSummary> {
        let content = std::fs::read(path).map_err(|e| {
            CashbookError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.import(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashbookPaths;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_import_creates_categories_and_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        let csv = "title, type, value, category\n\
                   Groceries, outcome, 50, Food\n\
                   Salary, income, 2000, Work\n";
        let summary = service.import(csv.as_bytes()).unwrap();

        assert_eq!(summary.imported(), 2);
        assert_eq!(summary.created_categories.len(), 2);
        assert!(summary.reused_categories.is_empty());
        assert_eq!(summary.transactions[0].title, "Groceries");

        let balance = BalanceService::new(&storage.transactions).balance().unwrap();
        assert_eq!(balance.income, Money::from_units(2000));
        assert_eq!(balance.outcome, Money::from_units(50));
        assert_eq!(balance.total, Money::from_units(1950));
        assert_eq!(summary.balance, balance);
    }

    #[test]
    fn test_repeated_new_title_shares_one_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        let csv = "title,type,value,category\n\
                   Coffee,outcome,3.50,Food\n\
                   Lunch,outcome,12,Food\n";
        let summary = service.import(csv.as_bytes()).unwrap();

        assert_eq!(summary.created_categories.len(), 1);
        assert_eq!(
            summary.transactions[0].category_id,
            summary.transactions[1].category_id
        );
        assert_eq!(storage.categories.count().unwrap(), 1);
    }

    #[test]
    fn test_existing_categories_are_reused() {
        let (_temp_dir, storage) = create_test_storage();
        let food = CategoryService::new(&storage.categories)
            .resolve("Food")
            .unwrap()
            .category;

        let service = ImportService::new(&storage.transactions, &storage.categories);
        let csv = "title,type,value,category\n\
                   Coffee,outcome,3.50,Food\n\
                   Salary,income,100,Work\n";
        let summary = service.import(csv.as_bytes()).unwrap();

        assert_eq!(summary.reused_categories.len(), 1);
        assert_eq!(summary.created_categories.len(), 1);
        assert_eq!(summary.transactions[0].category_id, food.id);
        assert_eq!(storage.categories.count().unwrap(), 2);
    }

    #[test]
    fn test_import_skips_balance_check() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        let csv = "title,type,value,category\nRent,outcome,900,Home\n";
        service.import(csv.as_bytes()).unwrap();

        let balance = BalanceService::new(&storage.transactions).balance().unwrap();
        assert_eq!(balance.total, Money::from_units(-900));
    }

    #[test]
    fn test_rows_with_empty_fields_are_skipped() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        let csv = "title,type,value,category\n\
                   ,,,\n\
                   Coffee,outcome,,Food\n\
                   Lunch,outcome,12,Food\n";
        let rows = service.parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Lunch");
        assert_eq!(rows[0].line, 4);
    }

    #[test]
    fn test_strict_mode_rejects_empty_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories)
            .with_format(ImportFormat::default().with_skip_empty_rows(false));

        let csv = "title,type,value,category\nCoffee,outcome,,Food\n";
        let err = service.parse_csv(csv.as_bytes()).unwrap_err();

        assert!(err.is_import());
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_decode_errors_report_line_and_write_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        let cases = [
            ("title,type,value,category\nA,income,10,X\nB,refund,5,Y\n", "line 3"),
            ("title,type,value,category\nA,income,ten,X\n", "line 2"),
            ("title,type,value,category\nA,income,1.234,X\n", "line 2"),
            ("title,type,value,category\nA,income,-5,X\n", "line 2"),
            ("title,type,value,category\nA,income,5\n", "line 2"),
        ];

        for (csv, expected) in cases {
            let err = service.import(csv.as_bytes()).unwrap_err();
            assert!(err.is_import(), "unexpected error: {err}");
            assert!(err.to_string().contains(expected), "{err}");
        }

        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.categories.count().unwrap(), 0);
    }

    #[test]
    fn test_custom_format() {
        let (_temp_dir, storage) = create_test_storage();
        let format = ImportFormat::default()
            .with_first_data_line(1)
            .with_delimiter(';');
        let service =
            ImportService::new(&storage.transactions, &storage.categories).with_format(format);

        let csv = "Salary;INCOME;1.5;Work\n\"Tea; green\";outcome;0.75;Food\n";
        let rows = service.parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].transaction_type, TransactionType::Income);
        assert_eq!(rows[0].value, Money::from_cents(150));
        assert_eq!(rows[1].title, "Tea; green");
    }

    #[test]
    fn test_non_ascii_delimiter_is_config_error() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories)
            .with_format(ImportFormat::default().with_delimiter('€'));

        let result = service.parse_csv(b"a,b,c,d\n");
        assert!(matches!(result, Err(CashbookError::Config(_))));
    }

    #[test]
    fn test_header_only_imports_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        let summary = service.import(b"title,type,value,category\n").unwrap();
        assert_eq!(summary.imported(), 0);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_import_file() {
        let (temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        let path = temp_dir.path().join("batch.csv");
        std::fs::write(&path, "title,type,value,category\nSalary,income,10,Work\n").unwrap();
        assert_eq!(service.import_file(&path).unwrap().imported(), 1);

        let missing = service.import_file(&temp_dir.path().join("missing.csv"));
        assert!(matches!(missing, Err(CashbookError::Io(_))));
    }

    #[test]
    fn test_batch_that_would_overflow_totals_writes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        let csv = "title,type,value,category\n\
                   A,income,92233720368547758,X\n\
                   B,income,92233720368547758,X\n";
        let err = service.import(csv.as_bytes()).unwrap_err();

        assert!(err.is_import(), "unexpected error: {err}");
        assert!(err.to_string().contains("line 3"), "{err}");
        assert!(err.to_string().contains("overflow"), "{err}");
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.categories.count().unwrap(), 0);
        assert!(BalanceService::new(&storage.transactions)
            .balance()
            .unwrap()
            .total
            .is_zero());
    }

    #[test]
    fn test_batch_overflowing_existing_totals_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage.transactions, &storage.categories);

        service
            .import(b"title,type,value,category\nA,income,92233720368547758,X\n")
            .unwrap();
        let err = service
            .import(b"title,type,value,category\nB,income,92233720368547758,X\n")
            .unwrap_err();

        assert!(err.is_import());
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }
}
