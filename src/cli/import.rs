//! CLI command handler for CSV import

use std::path::Path;

use crate::config::settings::Settings;
use crate::display::{format_balance, format_import_summary};
use crate::error::{CashbookError, CashbookResult};
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(storage: &Storage, settings: &Settings, file: &Path) -> CashbookResult<()> {
    if !file.exists() {
        return Err(CashbookError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let service = ImportService::new(&storage.transactions, &storage.categories)
        .with_format(settings.import.clone());
    let summary = service.import_file(file)?;

    let symbol = settings.currency_symbol.as_str();
    print!("{}", format_import_summary(&summary, symbol));
    println!();
    print!("{}", format_balance(&summary.balance, symbol));

    Ok(())
}
