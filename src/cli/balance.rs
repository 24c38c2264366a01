//! Balance CLI command

use crate::config::settings::Settings;
use crate::display::format_balance;
use crate::error::CashbookResult;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Print the current balance
pub fn handle_balance_command(storage: &Storage, settings: &Settings) -> CashbookResult<()> {
    let balance = BalanceService::new(&storage.transactions).balance()?;
    print!("{}", format_balance(&balance, &settings.currency_symbol));
    Ok(())
}
