//! Configuration module for Cashbook
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashbookPaths;
pub use settings::Settings;
