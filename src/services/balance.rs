//! Balance aggregation
//!
//! Folds every expense of an event through the share calculator to produce
//! each participant's net position.

use crate::models::{Balances, Expense, Participant, ParticipantId};

use super::shares::calculate_expense_shares;

/// Compute net balances for the given participants
///
/// Every participant starts at zero. For each usable expense the payer is
/// credited the full amount and each share is debited from its participant.
/// Shares are computed over the full participant list, with the expense's own
/// override map for percentage and custom policies.
///
/// Expenses without a payer or a positive finite amount are skipped. Credits
/// and debits for participants outside `participants` are dropped, so the
/// zero-sum property only holds when every payer and share holder is tracked.
pub fn calculate_user_balances(expenses: &[Expense], participants: &[Participant]) -> Balances {
    let participant_ids: Vec<ParticipantId> =
        participants.iter().map(|p| p.user_id.clone()).collect();
    let mut balances = Balances::zeroed(&participant_ids);

    if participant_ids.is_empty() {
        return balances;
    }

    for expense in expenses {
        let Some((payer_id, amount)) = expense.payer_and_amount() else {
            tracing::debug!(expense = %expense.label(), "skipping expense without payer or usable amount");
            continue;
        };

        let shares = calculate_expense_shares(
            amount,
            &expense.split_policy,
            &participant_ids,
            expense.custom_shares.as_ref(),
        );

        if !balances.adjust(payer_id.as_str(), amount) {
            tracing::debug!(
                expense = %expense.label(),
                payer = %payer_id,
                "payer is not a tracked participant, credit dropped"
            );
        }

        for share in &shares {
            if !balances.adjust(share.participant_id.as_str(), -share.amount) {
                tracing::debug!(
                    expense = %expense.label(),
                    participant = %share.participant_id,
                    "share holder is not a tracked participant, debit dropped"
                );
            }
        }
    }

    balances
}
