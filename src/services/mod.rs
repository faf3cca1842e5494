//! Settlement engine
//!
//! Pure functions over caller-supplied snapshots: no storage, no shared
//! state, no errors. Malformed input degrades to empty or partial results.

pub mod balance;
pub mod settlement;
pub mod shares;

pub use balance::calculate_user_balances;
pub use settlement::{
    apply_settlements, calculate_event_settlements, optimize_settlements, SETTLEMENT_TOLERANCE,
};
pub use shares::calculate_expense_shares;
