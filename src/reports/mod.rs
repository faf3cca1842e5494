//! Reports module for splitbill
//!
//! Runs the settlement engine over event snapshots and packages the results
//! for display and export.

pub mod event;
pub mod user_balance;

pub use event::EventReport;
pub use user_balance::{EventBalance, UserBalanceReport};
