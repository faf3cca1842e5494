//! Event Report
//!
//! Balances and suggested settlements for one event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::display::report::double_separator;
use crate::display::{format_balance_table, format_settlement_table, AmountFormatter};
use crate::error::SplitResult;
use crate::models::{Balances, Event, EventId, Settlement};
use crate::services::{calculate_user_balances, optimize_settlements};

/// Balances and settlements for one event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    /// Event identifier
    pub event_id: EventId,
    /// Event name
    pub event_name: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Participants included in the split
    pub participant_count: usize,
    /// Expense records in the snapshot
    pub expense_count: usize,
    /// Expense records skipped for a missing payer or unusable amount
    pub skipped_expense_count: usize,
    /// Net balance per participant
    pub balances: Balances,
    /// Suggested transfers
    pub settlements: Vec<Settlement>,
    /// Sum of all transfer amounts
    pub total_transferred: f64,
    /// Sum of all balances; non-zero when contributions were dropped
    pub residual: f64,
}

impl EventReport {
    /// Run the engine over an event snapshot
    pub fn generate(event: &Event) -> Self {
        let participants = event.calculation_participants();
        let expenses = event.calculation_expenses();

        let balances = calculate_user_balances(&expenses, &participants);
        let settlements = optimize_settlements(&balances);

        let skipped_expense_count = expenses
            .iter()
            .filter(|e| e.payer_and_amount().is_none())
            .count();
        let total_transferred = settlements.iter().map(|s| s.amount).sum();
        let residual = balances.total();

        tracing::info!(
            event = %event.id,
            participants = participants.len(),
            expenses = expenses.len(),
            skipped = skipped_expense_count,
            transfers = settlements.len(),
            "event report generated"
        );

        Self {
            event_id: event.id.clone(),
            event_name: event.name.clone(),
            generated_at: Utc::now(),
            participant_count: participants.len(),
            expense_count: expenses.len(),
            skipped_expense_count,
            balances,
            settlements,
            total_transferred,
            residual,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &AmountFormatter) -> String {
        let mut output = String::new();

        let title = if self.event_name.is_empty() {
            self.event_id.to_string()
        } else {
            format!("{} ({})", self.event_name, self.event_id)
        };
        output.push_str(&format!("Event Report: {}\n", title));
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!("Participants: {}\n", self.participant_count));
        output.push_str(&format!("Expenses:     {}", self.expense_count));
        if self.skipped_expense_count > 0 {
            output.push_str(&format!(" ({} skipped)", self.skipped_expense_count));
        }
        output.push('\n');
        if fmt.round(self.residual) != 0.0 {
            output.push_str(&format!(
                "Unaccounted:  {} (payers or shares outside the participant list)\n",
                fmt.format(self.residual)
            ));
        }

        output.push_str("\nBalances\n");
        output.push_str(&format_balance_table(&self.balances, fmt));
        output.push_str("\n\nSettlements\n");
        output.push_str(&format_settlement_table(&self.settlements, fmt));
        output.push('\n');

        if !self.settlements.is_empty() {
            output.push_str(&format!(
                "\n{} transfer(s), {} in total\n",
                self.settlements.len(),
                fmt.format(self.total_transferred)
            ));
        }

        output
    }

    /// Export the report to CSV format
    ///
    /// One row per participant balance, then one row per settlement.
    pub fn export_csv<W: Write>(&self, writer: W) -> SplitResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["event_id", "kind", "from", "to", "amount"])?;

        let event_id = self.event_id.as_str();
        for (participant, balance) in self.balances.iter() {
            let amount = format!("{:.2}", balance);
            csv.write_record([event_id, "balance", participant.as_str(), "", amount.as_str()])?;
        }
        for settlement in &self.settlements {
            let amount = format!("{:.2}", settlement.amount);
            csv.write_record([
                event_id,
                "settlement",
                settlement.from_user_id.as_str(),
                settlement.to_user_id.as_str(),
                amount.as_str(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Participant};

    fn trip() -> Event {
        Event::new("trip", "Ski trip")
            .with_creator("A")
            .with_participant(Participant::active("B"))
            .with_participant(Participant::active("C"))
            .with_participant(Participant::inactive("D"))
            .with_expense(Expense::new("A", 90.0).with_id("e1"))
            .with_expense(Expense::new("B", 30.0).with_id("e2"))
    }

    #[test]
    fn test_generate() {
        let report = EventReport::generate(&trip());

        assert_eq!(report.participant_count, 3);
        assert_eq!(report.expense_count, 2);
        assert_eq!(report.skipped_expense_count, 0);
        assert!((report.balances.get("A").unwrap() - 50.0).abs() < 1e-6);
        assert!(!report.balances.contains("D"));
        assert_eq!(report.settlements.len(), 2);
        assert!((report.total_transferred - 50.0).abs() < 1e-6);
        assert!(report.residual.abs() < 1e-6);
    }

    #[test]
    fn test_skipped_expenses_counted() {
        let mut broken = Expense::new("A", 10.0);
        broken.payer_id = None;
        let report = EventReport::generate(
            &trip()
                .with_expense(broken)
                .with_expense(Expense::new("B", -25.0)),
        );

        assert_eq!(report.expense_count, 4);
        assert_eq!(report.skipped_expense_count, 2);
        assert!(report.residual.abs() < 1e-9);
    }

    #[test]
    fn test_residual_for_untracked_payer() {
        let event = trip().with_expense(Expense::new("D", 30.0));
        let report = EventReport::generate(&event);
        assert!((report.residual + 30.0).abs() < 1e-6);

        let text = report.format_terminal(&AmountFormatter::default());
        assert!(text.contains("Unaccounted"));
    }

    #[test]
    fn test_format_terminal() {
        let report = EventReport::generate(&trip());
        let text = report.format_terminal(&AmountFormatter::default());

        assert!(text.contains("Event Report: Ski trip (trip)"));
        assert!(text.contains("+$50.00"));
        assert!(text.contains("$40.00"));
        assert!(text.contains("2 transfer(s), $50.00 in total"));
    }

    #[test]
    fn test_export_csv() {
        let report = EventReport::generate(&trip());
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "event_id,kind,from,to,amount");
        assert_eq!(lines[1], "trip,balance,A,,50.00");
        assert!(lines.contains(&"trip,settlement,C,A,40.00"));
        assert_eq!(lines.len(), 1 + 3 + 2);
    }

    #[test]
    fn test_json_serialization() {
        let report = EventReport::generate(&trip());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["event_id"], "trip");
        assert_eq!(json["settlements"][0]["from_user_id"], "C");
        assert!(json["balances"]["A"].is_number());
    }
}
