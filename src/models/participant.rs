//! Participant model
//!
//! A participant is a member of an event. Only active participants take part
//! in splitting; filtering is the caller's job, not the engine's.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ParticipantId;

/// Membership status of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    /// Participant takes part in splits
    #[default]
    Active,
    /// Participant left the event or was removed
    Inactive,
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// A member of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// User identifier, unique per event
    pub user_id: ParticipantId,

    /// Membership status
    #[serde(default)]
    pub status: ParticipantStatus,

    /// Default percentage used when a percentage expense carries no overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_percentage: Option<f64>,

    /// Default absolute amount used when a custom expense carries no overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_amount: Option<f64>,
}

impl Participant {
    /// Create an active participant
    pub fn active(user_id: impl Into<ParticipantId>) -> Self {
        Self {
            user_id: user_id.into(),
            status: ParticipantStatus::Active,
            share_percentage: None,
            custom_amount: None,
        }
    }

    /// Create an inactive participant
    pub fn inactive(user_id: impl Into<ParticipantId>) -> Self {
        Self {
            status: ParticipantStatus::Inactive,
            ..Self::active(user_id)
        }
    }

    /// Check if this participant takes part in splits
    pub fn is_active(&self) -> bool {
        self.status == ParticipantStatus::Active
    }
}
