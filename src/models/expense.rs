//! Expense model
//!
//! An expense is one payment made by a participant on behalf of the group,
//! split among participants according to a [`SplitPolicy`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::ids::{ExpenseId, ParticipantId};

/// Per-participant override values (percentages or absolute amounts)
pub type CustomShares = BTreeMap<ParticipantId, f64>;

/// Rule determining how an expense amount is divided
///
/// Unrecognized policy names are kept as [`SplitPolicy::Unknown`] so that a
/// single odd record contributes nothing instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SplitPolicy {
    /// Everyone owes the same amount
    #[default]
    Equal,
    /// Overrides hold percentages of the total
    Percentage,
    /// Overrides hold absolute amounts
    Custom,
    /// Anything else
    Unknown(String),
}

impl SplitPolicy {
    /// The canonical name of the policy
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equal => "equal",
            Self::Percentage => "percentage",
            Self::Custom => "custom",
            Self::Unknown(name) => name,
        }
    }

    /// Check if the policy reads per-participant overrides
    pub fn uses_overrides(&self) -> bool {
        matches!(self, Self::Percentage | Self::Custom)
    }
}

impl FromStr for SplitPolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "" | "equal" => Self::Equal,
            "percentage" => Self::Percentage,
            "custom" => Self::Custom,
            _ => Self::Unknown(s.trim().to_string()),
        })
    }
}

impl From<String> for SplitPolicy {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(policy) => policy,
            Err(never) => match never {},
        }
    }
}

impl From<SplitPolicy> for String {
    fn from(policy: SplitPolicy) -> Self {
        policy.as_str().to_string()
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded group expense
///
/// `payer_id` and `amount` are optional so that incomplete records coming
/// from the persistence layer can still be loaded; the balance fold skips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,

    /// Participant who paid
    #[serde(default)]
    pub payer_id: Option<ParticipantId>,

    /// Total amount paid
    #[serde(default)]
    pub amount: Option<f64>,

    /// How the amount is divided
    #[serde(default, rename = "split_type")]
    pub split_policy: SplitPolicy,

    /// Per-participant overrides for percentage/custom policies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_shares: Option<CustomShares>,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Date the expense occurred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<NaiveDate>,
}

impl Expense {
    /// Create an equally split expense
    pub fn new(payer_id: impl Into<ParticipantId>, amount: f64) -> Self {
        Self {
            id: None,
            payer_id: Some(payer_id.into()),
            amount: Some(amount),
            split_policy: SplitPolicy::Equal,
            custom_shares: None,
            description: String::new(),
            expense_date: None,
        }
    }

    /// Create an expense with a policy and overrides
    pub fn with_shares(
        payer_id: impl Into<ParticipantId>,
        amount: f64,
        split_policy: SplitPolicy,
        custom_shares: CustomShares,
    ) -> Self {
        Self {
            split_policy,
            custom_shares: Some(custom_shares),
            ..Self::new(payer_id, amount)
        }
    }

    /// Set the identifier
    pub fn with_id(mut self, id: impl Into<ExpenseId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Build an expense from a raw persistence record
    ///
    /// A record that does not match the expense shape becomes an unusable
    /// expense (no payer, no amount) keeping whatever `id` and `description`
    /// it carries, so one bad row cannot fail a whole event.
    pub fn from_record(record: &serde_json::Value) -> Self {
        match Self::deserialize(record) {
            Ok(expense) => expense,
            Err(err) => {
                let id = record
                    .get("id")
                    .and_then(serde_json::Value::as_str)
                    .map(ExpenseId::from);
                let description = record
                    .get("description")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                tracing::warn!(
                    expense = id.as_ref().map(ExpenseId::as_str).unwrap_or("(unnamed)"),
                    error = %err,
                    "malformed expense record, it will be skipped"
                );
                Self {
                    id,
                    payer_id: None,
                    amount: None,
                    split_policy: SplitPolicy::default(),
                    custom_shares: None,
                    description,
                    expense_date: None,
                }
            }
        }
    }

    /// Payer and amount, if the record is usable for balance calculation
    ///
    /// Non-finite, zero and negative amounts are treated as missing.
    pub fn payer_and_amount(&self) -> Option<(&ParticipantId, f64)> {
        let payer = self.payer_id.as_ref()?;
        let amount = self.amount.filter(|a| a.is_finite() && *a > 0.0)?;
        Some((payer, amount))
    }

    /// A short label for logs and tables
    pub fn label(&self) -> String {
        match (&self.id, self.description.is_empty()) {
            (Some(id), true) => id.to_string(),
            (Some(id), false) => format!("{} ({})", id, self.description),
            (None, false) => self.description.clone(),
            (None, true) => "(unnamed expense)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("equal".parse::<SplitPolicy>().unwrap(), SplitPolicy::Equal);
        assert_eq!(
            "Percentage".parse::<SplitPolicy>().unwrap(),
            SplitPolicy::Percentage
        );
        assert_eq!("custom".parse::<SplitPolicy>().unwrap(), SplitPolicy::Custom);
        assert_eq!(
            "shares".parse::<SplitPolicy>().unwrap(),
            SplitPolicy::Unknown("shares".into())
        );
    }

    #[test]
    fn test_split_type_defaults_to_equal() {
        let expense: Expense =
            serde_json::from_str(r#"{"payer_id": "alice", "amount": 12.5}"#).unwrap();
        assert_eq!(expense.split_policy, SplitPolicy::Equal);
        assert_eq!(expense.amount, Some(12.5));
        assert!(expense.custom_shares.is_none());
    }

    #[test]
    fn test_unknown_split_type_is_preserved() {
        let expense: Expense = serde_json::from_str(
            r#"{"payer_id": "alice", "amount": 10, "split_type": "by_weight"}"#,
        )
        .unwrap();
        assert_eq!(expense.split_policy, SplitPolicy::Unknown("by_weight".into()));

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["split_type"], "by_weight");
    }

    #[test]
    fn test_missing_payer_is_loadable() {
        let expense: Expense = serde_json::from_str(r#"{"amount": 10}"#).unwrap();
        assert!(expense.payer_and_amount().is_none());
    }

    #[test]
    fn test_non_finite_amount_is_unusable() {
        let expense = Expense::new("alice", f64::NAN);
        assert!(expense.payer_and_amount().is_none());

        let expense = Expense::new("alice", 20.0);
        assert_eq!(expense.payer_and_amount().map(|(_, a)| a), Some(20.0));
    }

    #[test]
    fn test_non_positive_amount_is_unusable() {
        assert!(Expense::new("alice", 0.0).payer_and_amount().is_none());
        assert!(Expense::new("alice", -50.0).payer_and_amount().is_none());
    }

    #[test]
    fn test_malformed_record_becomes_unusable() {
        let record = serde_json::json!({
            "id": "e7",
            "payer_id": "bob",
            "amount": "12.50",
            "description": "Taxi"
        });
        let expense = Expense::from_record(&record);

        assert_eq!(expense.id, Some(ExpenseId::from("e7")));
        assert_eq!(expense.description, "Taxi");
        assert!(expense.payer_id.is_none());
        assert!(expense.payer_and_amount().is_none());

        let expense = Expense::from_record(&serde_json::json!({"payer_id": "a", "split_type": null}));
        assert!(expense.payer_and_amount().is_none());

        let expense = Expense::from_record(&serde_json::json!(42));
        assert!(expense.id.is_none());
    }

    #[test]
    fn test_well_formed_record() {
        let expense = Expense::from_record(&serde_json::json!({"payer_id": "a", "amount": 9.5}));
        assert_eq!(expense.payer_and_amount().map(|(_, a)| a), Some(9.5));
    }

    #[test]
    fn test_expense_date() {
        let expense: Expense = serde_json::from_str(
            r#"{"payer_id": "a", "amount": 1, "expense_date": "2025-01-04"}"#,
        )
        .unwrap();
        assert_eq!(expense.expense_date, NaiveDate::from_ymd_opt(2025, 1, 4));
    }

    #[test]
    fn test_label() {
        let expense = Expense::new("a", 1.0).with_id("e1").with_description("Cabin");
        assert_eq!(expense.label(), "e1 (Cabin)");
        assert_eq!(Expense::new("a", 1.0).label(), "(unnamed expense)");
    }
}
