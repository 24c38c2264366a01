//! Service layer for Cashbook
//!
//! The service layer provides business logic on top of the store traits,
//! handling validation, the balance rule and batch category resolution.

pub mod balance;
pub mod category;
pub mod import;
pub mod transaction;

pub use balance::{calculate_balance, BalanceService};
pub use category::{CategoryResolution, CategoryService, ResolvedCategory};
pub use import::{ImportFormat, ImportService, ImportSummary, ParsedTransaction};
pub use transaction::{CreateTransactionInput, TransactionService, TransactionWithCategory};
