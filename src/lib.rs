//! splitbill - group expense splitting and settlement
//!
//! This library provides the engine behind the `splitbill` command: it
//! divides an expense among participants, folds an event's expenses into
//! net balances and proposes a short list of transfers that settles them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (participants, expenses, events, settlements)
//! - `services`: The split, balance and settlement calculations
//! - `storage`: Event snapshot loading and atomic file writes
//! - `reports`: Per-event and per-user reports
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use splitbill::models::{Expense, Participant};
//! use splitbill::services::calculate_event_settlements;
//!
//! let participants = vec![Participant::active("alice"), Participant::active("bob")];
//! let expenses = vec![Expense::new("alice", 60.0)];
//!
//! let settlements = calculate_event_settlements(&expenses, &participants);
//! assert_eq!(settlements.len(), 1);
//! assert_eq!(settlements[0].from_user_id.as_str(), "bob");
//! assert!((settlements[0].amount - 30.0).abs() < 1e-9);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SplitError, SplitResult};
