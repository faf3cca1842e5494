//! Settlement model
//!
//! A suggested single payment from a debtor to a creditor.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ParticipantId;

/// A suggested transfer that reduces outstanding balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Participant who pays
    pub from_user_id: ParticipantId,

    /// Participant who receives
    pub to_user_id: ParticipantId,

    /// Amount to transfer, always positive
    pub amount: f64,
}

impl Settlement {
    /// Create a new settlement
    pub fn new(
        from_user_id: impl Into<ParticipantId>,
        to_user_id: impl Into<ParticipantId>,
        amount: f64,
    ) -> Self {
        Self {
            from_user_id: from_user_id.into(),
            to_user_id: to_user_id.into(),
            amount,
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {:.2}",
            self.from_user_id, self.to_user_id, self.amount
        )
    }
}
