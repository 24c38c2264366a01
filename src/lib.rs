//! Cashbook - a command-line ledger of incomes and outcomes
//!
//! This library provides the core functionality for the Cashbook application:
//! recording transactions against a running balance, tagging them with
//! categories that are created on first use, and bulk-importing them from CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, balance)
//! - `storage`: Store traits and their JSON file implementations
//! - `services`: Business logic layer
//! - `cli`: Command handlers for the `cashbook` binary
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use cashbook::config::{paths::CashbookPaths, settings::Settings};
//! use cashbook::services::BalanceService;
//! use cashbook::storage::Storage;
//!
//! let paths = CashbookPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let balance = BalanceService::new(&storage.transactions).balance()?;
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CashbookError, CashbookResult};

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr so
/// command output on stdout stays clean. Calling this more than once is a
/// no-op.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("cashbook=info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
