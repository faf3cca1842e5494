//! Core data models for splitbill
//!
//! This module contains the data structures the settlement engine consumes
//! and produces: participants, expenses, shares, balances and settlements,
//! plus the event snapshot that groups them.

pub mod balance;
pub mod event;
pub mod expense;
pub mod ids;
pub mod participant;
pub mod settlement;
pub mod share;

pub use balance::Balances;
pub use event::Event;
pub use expense::{CustomShares, Expense, SplitPolicy};
pub use ids::{EventId, ExpenseId, ParticipantId};
pub use participant::{Participant, ParticipantStatus};
pub use settlement::Settlement;
pub use share::Share;
