//! Settlement optimizer
//!
//! Turns net balances into a short list of peer-to-peer transfers using a
//! largest-first greedy match between debtors and creditors. The greedy match
//! is deterministic and emits at most `n - 1` transfers for `n` unsettled
//! participants, but is not guaranteed to reach the true minimum count.

use crate::models::{Balances, Expense, Participant, ParticipantId, Settlement};

use super::balance::calculate_user_balances;

/// Balances within this distance of zero count as settled
pub const SETTLEMENT_TOLERANCE: f64 = 0.01;

/// Compute the suggested transfers for an event
pub fn calculate_event_settlements(
    expenses: &[Expense],
    participants: &[Participant],
) -> Vec<Settlement> {
    optimize_settlements(&calculate_user_balances(expenses, participants))
}

/// Match debtors with creditors, largest amounts first
///
/// Participants within [`SETTLEMENT_TOLERANCE`] of zero are left out. Both
/// sides are sorted by magnitude, descending; ties keep participant id order.
/// Each step transfers the smaller of the current debt and credit and moves
/// past any side whose remainder falls below the tolerance. Transfers are
/// returned in the order they were generated.
pub fn optimize_settlements(balances: &Balances) -> Vec<Settlement> {
    let mut debtors: Vec<(&ParticipantId, f64)> = Vec::new();
    let mut creditors: Vec<(&ParticipantId, f64)> = Vec::new();

    for (participant_id, balance) in balances.iter() {
        if balance < -SETTLEMENT_TOLERANCE {
            debtors.push((participant_id, -balance));
        } else if balance > SETTLEMENT_TOLERANCE {
            creditors.push((participant_id, balance));
        }
    }

    // Stable sorts over id-ordered input: ties resolve by participant id.
    debtors.sort_by(|a, b| b.1.total_cmp(&a.1));
    creditors.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut settlements = Vec::with_capacity(debtors.len() + creditors.len());
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].1.min(creditors[j].1);

        settlements.push(Settlement::new(
            debtors[i].0.clone(),
            creditors[j].0.clone(),
            amount,
        ));

        debtors[i].1 -= amount;
        creditors[j].1 -= amount;

        if debtors[i].1 < SETTLEMENT_TOLERANCE {
            i += 1;
        }
        if creditors[j].1 < SETTLEMENT_TOLERANCE {
            j += 1;
        }
    }

    tracing::debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        transfers = settlements.len(),
        "settlements optimized"
    );

    settlements
}

/// Apply transfers to balances
///
/// The payer's balance rises by the amount and the receiver's falls by it.
/// Transfers naming untracked participants only affect the tracked side.
pub fn apply_settlements(balances: &Balances, settlements: &[Settlement]) -> Balances {
    let mut adjusted = balances.clone();
    for settlement in settlements {
        adjusted.adjust(settlement.from_user_id.as_str(), settlement.amount);
        adjusted.adjust(settlement.to_user_id.as_str(), -settlement.amount);
    }
    adjusted
}
