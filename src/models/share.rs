//! Share model
//!
//! One participant's portion of a single expense.

use serde::{Deserialize, Serialize};

use super::ids::ParticipantId;

/// A participant's owed portion of an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Participant who owes the share
    pub participant_id: ParticipantId,

    /// Amount owed
    pub amount: f64,

    /// Share of the expense total, in percent
    pub percentage: f64,
}

impl Share {
    /// Create a new share
    pub fn new(participant_id: impl Into<ParticipantId>, amount: f64, percentage: f64) -> Self {
        Self {
            participant_id: participant_id.into(),
            amount,
            percentage,
        }
    }
}
