//! Display formatting for terminal output
//!
//! Provides utilities for formatting engine results for terminal display.

pub mod report;
pub mod tables;

pub use report::{format_percentage, AmountFormatter};
pub use tables::{format_balance_table, format_settlement_table, format_share_table};
