//! Event snapshot loading
//!
//! Event files stand in for the persistence layer: each holds one event's
//! participants and expenses as JSON.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{SplitError, SplitResult};
use crate::models::Event;

use super::file_io::read_json_required;

/// Load and validate one event snapshot
pub fn load_event<P: AsRef<Path>>(path: P) -> SplitResult<Event> {
    let path = path.as_ref();
    let event: Event = read_json_required(path)?;
    validate_event(&event)?;

    tracing::debug!(
        path = %path.display(),
        event = %event.id,
        participants = event.participants.len(),
        expenses = event.expenses.len(),
        "loaded event snapshot"
    );

    Ok(event)
}

/// Load several event snapshots, rejecting duplicate event ids
pub fn load_events<I, P>(paths: I) -> SplitResult<Vec<Event>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut seen = HashSet::new();
    let mut events = Vec::new();

    for path in paths {
        let event = load_event(path)?;
        if !seen.insert(event.id.clone()) {
            return Err(SplitError::Validation(format!(
                "Event '{}' appears in more than one file",
                event.id
            )));
        }
        events.push(event);
    }

    Ok(events)
}

/// Structural checks on a snapshot
///
/// Only identity problems are rejected. Incomplete expenses are left for the
/// engine, which skips them.
pub fn validate_event(event: &Event) -> SplitResult<()> {
    if event.id.is_blank() {
        return Err(SplitError::Validation("Event id cannot be empty".into()));
    }

    if let Some(participant) = event.participants.iter().find(|p| p.user_id.is_blank()) {
        return Err(SplitError::Validation(format!(
            "Event '{}' has a participant with an empty user_id (status {})",
            event.id, participant.status
        )));
    }

    if event.creator_id.as_ref().is_some_and(|c| c.is_blank()) {
        return Err(SplitError::Validation(format!(
            "Event '{}' has an empty creator_id",
            event.id
        )));
    }

    Ok(())
}
