use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cashbook::cli::{
    handle_balance_command, handle_category_command, handle_import_command,
    handle_transaction_command, CategoryCommands, TransactionCommands,
};
use cashbook::config::{paths::CashbookPaths, settings::Settings};
use cashbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cashbook",
    version,
    about = "Command-line ledger of incomes and outcomes",
    long_about = "Cashbook records incomes and outcomes, tags them with categories \
                  and keeps a running balance. Outcomes that would overdraw the \
                  balance are rejected. Transactions can be bulk-imported from CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Import transactions from a CSV file (title, type, value, category)
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Show income, outcome and total
    Balance,

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CashbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    cashbook::init_tracing(&settings.log_filter);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, &settings, &file)?;
        }
        Some(Commands::Balance) => {
            handle_balance_command(&storage, &settings)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Cashbook at: {}", paths.base_dir().display());
            cashbook::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Record your first transaction with:");
            println!("  cashbook transaction add Salary 2000 --type income --category Work");
        }
        Some(Commands::Config) => {
            println!("Cashbook Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log filter:      {}", settings.log_filter);
            println!(
                "  Import format:   first data line {}, delimiter '{}', skip empty rows: {}",
                settings.import.first_data_line,
                settings.import.delimiter,
                settings.import.skip_empty_rows
            );
        }
        None => {
            println!("Cashbook - income and outcome ledger");
            println!();
            println!("Run 'cashbook --help' for usage information.");
        }
    }

    Ok(())
}
