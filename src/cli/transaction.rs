//! Transaction CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_balance, format_transaction_details, format_transaction_table};
use crate::error::{CashbookError, CashbookResult};
use crate::models::{Money, TransactionType};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or outcome
    Add {
        /// Short description
        title: String,
        /// Amount (e.g., "50" or "49.99")
        value: String,
        /// "income" or "outcome"
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Category title; created if it does not exist
        #[arg(short, long)]
        category: String,
    },

    /// List transactions followed by the current balance
    List {
        /// Only show transactions in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID (full or as shown in the list)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> CashbookResult<()> {
    let service = TransactionService::new(&storage.transactions, &storage.categories);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            title,
            value,
            kind,
            category,
        } => {
            let value = Money::parse(&value)
                .map_err(|e| CashbookError::Validation(format!("Invalid value: {}", e)))?;
            let transaction_type = kind
                .parse::<TransactionType>()
                .map_err(|e| CashbookError::Validation(e.to_string()))?;

            let txn = service.create(CreateTransactionInput::new(
                title,
                value,
                transaction_type,
                category.as_str(),
            ))?;

            println!(
                "Recorded {}: {} {}",
                txn.transaction_type,
                txn.title,
                txn.value.format_with_symbol(symbol)
            );
            println!("  Category: {}", category.trim());
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List { category } => {
            let transactions = service.list(category.as_deref())?;
            print!("{}", format_transaction_table(&transactions, symbol));
            println!();
            print!("{}", format_balance(&service.balance()?, symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            let category = storage.categories.get(txn.category_id)?;
            print!("{}", format_transaction_details(&txn, category.as_ref(), symbol));
        }
    }

    Ok(())
}
