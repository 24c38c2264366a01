//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and summaries.

pub mod balance;
pub mod category;
pub mod transaction;

pub use balance::format_balance;
pub use category::format_category_list;
pub use transaction::{format_import_summary, format_transaction_details, format_transaction_table};
