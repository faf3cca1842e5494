//! Balance model
//!
//! Net position of every participant in an event. Positive means the group
//! owes the participant money; negative means the participant owes the group.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::ParticipantId;

/// Net balances keyed by participant, iterated in participant id order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balances(BTreeMap<ParticipantId, f64>);

impl Balances {
    /// Create an empty balance map
    pub fn new() -> Self {
        Self::default()
    }

    /// Start every participant at zero
    pub fn zeroed<'a, I>(participants: I) -> Self
    where
        I: IntoIterator<Item = &'a ParticipantId>,
    {
        Self(participants.into_iter().map(|id| (id.clone(), 0.0)).collect())
    }

    /// Get a participant's balance
    pub fn get(&self, participant_id: &str) -> Option<f64> {
        self.0.get(participant_id).copied()
    }

    /// Check if a participant is tracked
    pub fn contains(&self, participant_id: &str) -> bool {
        self.0.contains_key(participant_id)
    }

    /// Add `delta` to a tracked participant's balance
    ///
    /// Returns `false` (and changes nothing) for untracked participants.
    pub fn adjust(&mut self, participant_id: &str, delta: f64) -> bool {
        match self.0.get_mut(participant_id) {
            Some(balance) => {
                *balance += delta;
                true
            }
            None => false,
        }
    }

    /// Set a balance, tracking the participant if needed
    pub fn insert(&mut self, participant_id: impl Into<ParticipantId>, balance: f64) {
        self.0.insert(participant_id.into(), balance);
    }

    /// Sum of all balances; zero for a closed expense set
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Check if every balance is within `tolerance` of zero
    pub fn is_settled(&self, tolerance: f64) -> bool {
        self.0.values().all(|b| b.abs() <= tolerance)
    }

    /// Number of tracked participants
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no participant is tracked
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over participants and balances in id order
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, f64)> {
        self.0.iter().map(|(id, balance)| (id, *balance))
    }
}

impl FromIterator<(ParticipantId, f64)> for Balances {
    fn from_iter<T: IntoIterator<Item = (ParticipantId, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
