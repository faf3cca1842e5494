//! User Balance Report
//!
//! One user's net position across several events.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::display::report::{double_separator, separator, truncate};
use crate::display::AmountFormatter;
use crate::error::{SplitError, SplitResult};
use crate::models::{Event, EventId, ParticipantId};
use crate::services::calculate_user_balances;

/// The user's balance within one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBalance {
    /// Event identifier
    pub event_id: EventId,
    /// Event name
    pub event_name: String,
    /// The user's net balance in the event
    pub balance: f64,
}

/// A user's balances summed over events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBalanceReport {
    /// The user the report is for
    pub user_id: ParticipantId,
    /// Per-event balances, in input order
    pub event_balances: Vec<EventBalance>,
    /// Sum of the per-event balances
    pub total_balance: f64,
}

impl UserBalanceReport {
    /// Compute the user's balance in every event they take part in
    ///
    /// Events where the user is not a calculation participant are left out.
    /// Returns an error if the user takes part in none of the events.
    pub fn generate(user_id: &ParticipantId, events: &[Event]) -> SplitResult<Self> {
        let mut event_balances = Vec::new();

        for event in events {
            let participants = event.calculation_participants();
            if !participants.iter().any(|p| &p.user_id == user_id) {
                tracing::debug!(event = %event.id, user = %user_id, "user not in event, skipped");
                continue;
            }

            let balances = calculate_user_balances(&event.calculation_expenses(), &participants);
            let balance = balances.get(user_id.as_str()).unwrap_or_default();

            event_balances.push(EventBalance {
                event_id: event.id.clone(),
                event_name: event.name.clone(),
                balance,
            });
        }

        if event_balances.is_empty() {
            return Err(SplitError::participant_not_found(user_id.as_str()));
        }

        let total_balance = event_balances.iter().map(|e| e.balance).sum();

        Ok(Self {
            user_id: user_id.clone(),
            event_balances,
            total_balance,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &AmountFormatter) -> String {
        let mut output = String::new();

        output.push_str(&format!("Balance Summary: {}\n", self.user_id));
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!("{:<40} {:>14}\n", "Event", "Balance"));
        output.push_str(&separator(60));
        output.push('\n');

        for entry in &self.event_balances {
            let label = if entry.event_name.is_empty() {
                entry.event_id.to_string()
            } else {
                entry.event_name.clone()
            };
            output.push_str(&format!(
                "{:<40} {:>14}\n",
                truncate(&label, 40),
                fmt.format_signed(entry.balance)
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<40} {:>14}\n",
            "TOTAL",
            fmt.format_signed(self.total_balance)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> SplitResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["user_id", "event_id", "event_name", "balance"])?;

        let user_id = self.user_id.as_str();
        for entry in &self.event_balances {
            let balance = format!("{:.2}", entry.balance);
            csv.write_record([
                user_id,
                entry.event_id.as_str(),
                entry.event_name.as_str(),
                balance.as_str(),
            ])?;
        }
        let total = format!("{:.2}", self.total_balance);
        csv.write_record([user_id, "", "TOTAL", total.as_str()])?;

        csv.flush()?;
        Ok(())
    }
}
