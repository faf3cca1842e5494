//! Event model
//!
//! An event is a snapshot of one group's participants and expenses, as handed
//! over by the persistence layer. It owns the caller-side pre-processing that
//! the engine deliberately knows nothing about: dropping inactive members,
//! injecting the creator, and filling overrides from participant defaults.

use serde::{Deserialize, Deserializer, Serialize};

use super::expense::{CustomShares, Expense, SplitPolicy};
use super::ids::{EventId, ParticipantId};
use super::participant::Participant;

/// A snapshot of one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: EventId,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// User who created the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<ParticipantId>,

    /// Whether the creator takes part in splits without a participant record
    #[serde(default = "default_creator_participates")]
    pub creator_participates: bool,

    /// Participant records, in join order
    #[serde(default)]
    pub participants: Vec<Participant>,

    /// Expense records, in recording order
    #[serde(default, deserialize_with = "deserialize_expenses")]
    pub expenses: Vec<Expense>,
}

fn default_creator_participates() -> bool {
    true
}

/// Malformed expense records load as unusable expenses instead of failing
fn deserialize_expenses<'de, D>(deserializer: D) -> Result<Vec<Expense>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(records.iter().map(Expense::from_record).collect())
}

impl Event {
    /// Create an empty event
    pub fn new(id: impl Into<EventId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            creator_id: None,
            creator_participates: true,
            participants: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// Set the creator
    pub fn with_creator(mut self, creator_id: impl Into<ParticipantId>) -> Self {
        self.creator_id = Some(creator_id.into());
        self
    }

    /// Add a participant record
    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    /// Add an expense record
    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    /// Participants the engine should split among
    ///
    /// Active participants in record order, followed by a synthetic active
    /// record for the creator when the creator participates and has no active
    /// record of their own. Duplicate ids keep their first occurrence.
    pub fn calculation_participants(&self) -> Vec<Participant> {
        let mut result: Vec<Participant> = Vec::with_capacity(self.participants.len() + 1);

        for participant in self.participants.iter().filter(|p| p.is_active()) {
            if result.iter().any(|p| p.user_id == participant.user_id) {
                tracing::debug!(
                    event = %self.id,
                    participant = %participant.user_id,
                    "duplicate participant record ignored"
                );
                continue;
            }
            result.push(participant.clone());
        }

        if let Some(creator) = self.creator_id.as_ref().filter(|_| self.creator_participates) {
            if !result.iter().any(|p| &p.user_id == creator) {
                result.push(Participant::active(creator.clone()));
            }
        }

        result
    }

    /// Expenses with overrides resolved from participant defaults
    ///
    /// A percentage or custom expense without its own override map borrows one
    /// built from the calculation participants' `share_percentage` or
    /// `custom_amount`. Expenses that carry overrides are returned unchanged.
    pub fn calculation_expenses(&self) -> Vec<Expense> {
        let participants = self.calculation_participants();

        self.expenses
            .iter()
            .map(|expense| {
                let has_overrides = expense
                    .custom_shares
                    .as_ref()
                    .is_some_and(|shares| !shares.is_empty());
                if has_overrides || !expense.split_policy.uses_overrides() {
                    return expense.clone();
                }

                let defaults = participant_defaults(&participants, &expense.split_policy);
                let mut resolved = expense.clone();
                if !defaults.is_empty() {
                    resolved.custom_shares = Some(defaults);
                }
                resolved
            })
            .collect()
    }

    /// Check if a user is among the calculation participants
    pub fn includes(&self, user_id: &ParticipantId) -> bool {
        self.calculation_participants()
            .iter()
            .any(|p| &p.user_id == user_id)
    }
}

fn participant_defaults(participants: &[Participant], policy: &SplitPolicy) -> CustomShares {
    participants
        .iter()
        .filter_map(|p| {
            let value = match policy {
                SplitPolicy::Percentage => p.share_percentage,
                SplitPolicy::Custom => p.custom_amount,
                _ => None,
            }?;
            Some((p.user_id.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(participants: &[Participant]) -> Vec<&str> {
        participants.iter().map(|p| p.user_id.as_str()).collect()
    }

    #[test]
    fn test_inactive_participants_are_dropped() {
        let event = Event::new("trip", "Trip")
            .with_participant(Participant::active("a"))
            .with_participant(Participant::inactive("b"))
            .with_participant(Participant::active("c"));

        assert_eq!(ids(&event.calculation_participants()), vec!["a", "c"]);
    }

    #[test]
    fn test_creator_is_injected() {
        let event = Event::new("trip", "Trip")
            .with_creator("owner")
            .with_participant(Participant::active("a"));

        assert_eq!(ids(&event.calculation_participants()), vec!["a", "owner"]);
        assert!(event.includes(&ParticipantId::from("owner")));
    }

    #[test]
    fn test_creator_not_duplicated() {
        let event = Event::new("trip", "Trip")
            .with_creator("a")
            .with_participant(Participant::active("a"));

        assert_eq!(ids(&event.calculation_participants()), vec!["a"]);
    }

    #[test]
    fn test_creator_can_opt_out() {
        let mut event = Event::new("trip", "Trip")
            .with_creator("owner")
            .with_participant(Participant::active("a"));
        event.creator_participates = false;

        assert_eq!(ids(&event.calculation_participants()), vec!["a"]);
        assert!(!event.includes(&ParticipantId::from("owner")));
    }

    #[test]
    fn test_duplicate_records_keep_first() {
        let mut second = Participant::active("a");
        second.share_percentage = Some(99.0);
        let event = Event::new("trip", "Trip")
            .with_participant(Participant::active("a"))
            .with_participant(second);

        let participants = event.calculation_participants();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].share_percentage, None);
    }

    #[test]
    fn test_percentage_defaults_from_participants() {
        let mut a = Participant::active("a");
        a.share_percentage = Some(30.0);
        let mut b = Participant::active("b");
        b.share_percentage = Some(70.0);

        let mut expense = Expense::new("a", 200.0);
        expense.split_policy = SplitPolicy::Percentage;

        let event = Event::new("trip", "Trip")
            .with_participant(a)
            .with_participant(b)
            .with_expense(expense);

        let expenses = event.calculation_expenses();
        let shares = expenses[0].custom_shares.as_ref().unwrap();
        assert_eq!(shares.get("a"), Some(&30.0));
        assert_eq!(shares.get("b"), Some(&70.0));
    }

    #[test]
    fn test_expense_overrides_win() {
        let mut a = Participant::active("a");
        a.custom_amount = Some(10.0);

        let overrides: CustomShares = [(ParticipantId::from("a"), 50.0)].into_iter().collect();
        let expense = Expense::with_shares("a", 50.0, SplitPolicy::Custom, overrides.clone());

        let event = Event::new("trip", "Trip")
            .with_participant(a)
            .with_expense(expense);

        assert_eq!(event.calculation_expenses()[0].custom_shares, Some(overrides));
    }

    #[test]
    fn test_equal_expenses_untouched() {
        let mut a = Participant::active("a");
        a.share_percentage = Some(100.0);
        let event = Event::new("trip", "Trip")
            .with_participant(a)
            .with_expense(Expense::new("a", 10.0));

        assert!(event.calculation_expenses()[0].custom_shares.is_none());
    }

    #[test]
    fn test_deserialize_minimal_event() {
        let event: Event = serde_json::from_str(r#"{"id": "e"}"#).unwrap();
        assert!(event.creator_participates);
        assert!(event.participants.is_empty());
        assert!(event.expenses.is_empty());
    }
}
