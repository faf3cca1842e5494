//! Storage layer for splitbill
//!
//! Reads event snapshots from JSON files and writes exports atomically.

pub mod events;
pub mod file_io;

pub use events::{load_event, load_events, validate_event};
pub use file_io::{read_json_required, write_atomic, write_json_atomic};
