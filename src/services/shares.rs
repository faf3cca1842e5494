//! Share calculator
//!
//! Divides a single expense amount among participants according to its split
//! policy. Pure computation: bad input degrades to an empty share list.

use crate::models::{CustomShares, ParticipantId, Share, SplitPolicy};

/// Compute each participant's share of one expense
///
/// - `Equal`: every participant owes `total / n` (no cent redistribution).
/// - `Percentage`: overrides hold percentages; `amount = total * pct / 100`.
/// - `Custom`: overrides hold amounts; `percentage = amount / total * 100`.
///
/// Participants missing from the override map get no share. An empty
/// participant list, an unknown policy, missing overrides for percentage or
/// custom, or a non-finite or non-positive total all yield an empty list.
/// Shares come back in `participant_ids` order.
pub fn calculate_expense_shares(
    total_amount: f64,
    split_policy: &SplitPolicy,
    participant_ids: &[ParticipantId],
    custom_shares: Option<&CustomShares>,
) -> Vec<Share> {
    if participant_ids.is_empty() || !total_amount.is_finite() || total_amount <= 0.0 {
        return Vec::new();
    }

    match split_policy {
        SplitPolicy::Equal => {
            let count = participant_ids.len() as f64;
            let amount = total_amount / count;
            let percentage = 100.0 / count;
            participant_ids
                .iter()
                .map(|id| Share::new(id.clone(), amount, percentage))
                .collect()
        }
        SplitPolicy::Percentage => overridden_shares(participant_ids, custom_shares, |pct| {
            (total_amount * pct / 100.0, pct)
        }),
        SplitPolicy::Custom => overridden_shares(participant_ids, custom_shares, |amount| {
            (amount, amount / total_amount * 100.0)
        }),
        SplitPolicy::Unknown(name) => {
            tracing::debug!(policy = %name, "unknown split policy, no shares computed");
            Vec::new()
        }
    }
}

/// Shares for participants present in the override map
fn overridden_shares<F>(
    participant_ids: &[ParticipantId],
    custom_shares: Option<&CustomShares>,
    to_amount_and_percentage: F,
) -> Vec<Share>
where
    F: Fn(f64) -> (f64, f64),
{
    let Some(overrides) = custom_shares.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    participant_ids
        .iter()
        .filter_map(|id| {
            let value = *overrides.get(id)?;
            if !value.is_finite() {
                tracing::debug!(participant = %id, "non-finite override ignored");
                return None;
            }
            let (amount, percentage) = to_amount_and_percentage(value);
            Some(Share::new(id.clone(), amount, percentage))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn ids(names: &[&str]) -> Vec<ParticipantId> {
        names.iter().map(|n| ParticipantId::from(*n)).collect()
    }

    fn overrides(pairs: &[(&str, f64)]) -> CustomShares {
        pairs
            .iter()
            .map(|(id, v)| (ParticipantId::from(*id), *v))
            .collect()
    }

    #[test]
    fn test_equal_split() {
        let shares =
            calculate_expense_shares(100.0, &SplitPolicy::Equal, &ids(&["A", "B", "C", "D"]), None);

        assert_eq!(shares.len(), 4);
        for share in &shares {
            assert!((share.amount - 25.0).abs() < EPS);
            assert!((share.percentage - 25.0).abs() < EPS);
        }
        assert_eq!(shares[0].participant_id.as_str(), "A");
        assert_eq!(shares[3].participant_id.as_str(), "D");
    }

    #[test]
    fn test_equal_split_uneven_total_sums_back() {
        let shares = calculate_expense_shares(100.0, &SplitPolicy::Equal, &ids(&["A", "B", "C"]), None);
        let total: f64 = shares.iter().map(|s| s.amount).sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_equal_split_ignores_overrides() {
        let custom = overrides(&[("A", 90.0)]);
        let shares =
            calculate_expense_shares(10.0, &SplitPolicy::Equal, &ids(&["A", "B"]), Some(&custom));
        assert_eq!(shares.len(), 2);
        assert!((shares[0].amount - 5.0).abs() < EPS);
    }

    #[test]
    fn test_percentage_split() {
        let custom = overrides(&[("A", 30.0), ("B", 70.0)]);
        let shares = calculate_expense_shares(
            200.0,
            &SplitPolicy::Percentage,
            &ids(&["A", "B"]),
            Some(&custom),
        );

        assert_eq!(shares.len(), 2);
        assert!((shares[0].amount - 60.0).abs() < EPS);
        assert!((shares[0].percentage - 30.0).abs() < EPS);
        assert!((shares[1].amount - 140.0).abs() < EPS);
        assert!((shares[1].percentage - 70.0).abs() < EPS);
    }

    #[test]
    fn test_custom_split() {
        let custom = overrides(&[("A", 50.0), ("B", 100.0)]);
        let shares =
            calculate_expense_shares(150.0, &SplitPolicy::Custom, &ids(&["A", "B"]), Some(&custom));

        assert_eq!(shares.len(), 2);
        assert!((shares[0].amount - 50.0).abs() < EPS);
        assert!((shares[0].percentage - 100.0 / 3.0).abs() < 1e-6);
        assert!((shares[1].amount - 100.0).abs() < EPS);
        assert!((shares[1].percentage - 200.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_absent_participants_get_no_share() {
        let custom = overrides(&[("B", 100.0)]);
        let shares = calculate_expense_shares(
            40.0,
            &SplitPolicy::Percentage,
            &ids(&["A", "B", "C"]),
            Some(&custom),
        );

        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].participant_id.as_str(), "B");
        assert!((shares[0].amount - 40.0).abs() < EPS);
    }

    #[test]
    fn test_override_for_non_participant_is_ignored() {
        let custom = overrides(&[("A", 50.0), ("Z", 50.0)]);
        let shares =
            calculate_expense_shares(100.0, &SplitPolicy::Custom, &ids(&["A"]), Some(&custom));
        assert_eq!(shares.len(), 1);
    }

    #[test]
    fn test_empty_participants() {
        assert!(calculate_expense_shares(42.0, &SplitPolicy::Equal, &[], None).is_empty());
        let custom = overrides(&[("A", 100.0)]);
        assert!(
            calculate_expense_shares(42.0, &SplitPolicy::Percentage, &[], Some(&custom)).is_empty()
        );
    }

    #[test]
    fn test_missing_overrides() {
        let participants = ids(&["A", "B"]);
        assert!(calculate_expense_shares(10.0, &SplitPolicy::Percentage, &participants, None).is_empty());
        assert!(calculate_expense_shares(
            10.0,
            &SplitPolicy::Custom,
            &participants,
            Some(&CustomShares::new())
        )
        .is_empty());
    }

    #[test]
    fn test_unknown_policy() {
        let shares = calculate_expense_shares(
            10.0,
            &SplitPolicy::Unknown("by_weight".into()),
            &ids(&["A"]),
            None,
        );
        assert!(shares.is_empty());
    }

    #[test]
    fn test_non_finite_total() {
        let participants = ids(&["A", "B"]);
        assert!(calculate_expense_shares(f64::NAN, &SplitPolicy::Equal, &participants, None).is_empty());
        assert!(
            calculate_expense_shares(f64::INFINITY, &SplitPolicy::Equal, &participants, None).is_empty()
        );
        assert!(calculate_expense_shares(0.0, &SplitPolicy::Equal, &participants, None).is_empty());
    }

    #[test]
    fn test_non_finite_override_skipped() {
        let custom = overrides(&[("A", f64::NAN), ("B", 10.0)]);
        let shares =
            calculate_expense_shares(10.0, &SplitPolicy::Custom, &ids(&["A", "B"]), Some(&custom));
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].participant_id.as_str(), "B");
    }
}
