//! Table views for engine results
//!
//! Renders shares, balances and settlements as terminal tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Balances, Settlement, Share};
use crate::services::SETTLEMENT_TOLERANCE;

use super::report::{balance_status, format_percentage, AmountFormatter};

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Participant")]
    participant: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    percentage: String,
}

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Participant")]
    participant: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

#[derive(Tabled)]
struct SettlementRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn render<T: Tabled>(rows: Vec<T>, numeric_from: usize) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(numeric_from..)).with(Alignment::right()))
        .to_string()
}

/// Format the shares of one expense as a table
pub fn format_share_table(shares: &[Share], fmt: &AmountFormatter) -> String {
    if shares.is_empty() {
        return "No shares computed.".to_string();
    }

    let rows = shares
        .iter()
        .map(|share| ShareRow {
            participant: share.participant_id.to_string(),
            amount: fmt.format(share.amount),
            percentage: format_percentage(share.percentage),
        })
        .collect();

    render(rows, 1)
}

/// Format net balances as a table
pub fn format_balance_table(balances: &Balances, fmt: &AmountFormatter) -> String {
    if balances.is_empty() {
        return "No participants.".to_string();
    }

    let rows: Vec<BalanceRow> = balances
        .iter()
        .map(|(participant, balance)| BalanceRow {
            participant: participant.to_string(),
            balance: fmt.format_signed(balance),
            status: balance_status(balance, SETTLEMENT_TOLERANCE),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

/// Format suggested transfers as a table
pub fn format_settlement_table(settlements: &[Settlement], fmt: &AmountFormatter) -> String {
    if settlements.is_empty() {
        return "Everyone is settled up.".to_string();
    }

    let rows = settlements
        .iter()
        .enumerate()
        .map(|(i, settlement)| SettlementRow {
            index: i + 1,
            from: settlement.from_user_id.to_string(),
            to: settlement.to_user_id.to_string(),
            amount: fmt.format(settlement.amount),
        })
        .collect();

    render(rows, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantId;

    #[test]
    fn test_balance_table_contents() {
        let balances: Balances = [
            (ParticipantId::from("alice"), 60.0),
            (ParticipantId::from("bob"), -30.0),
            (ParticipantId::from("carol"), 0.0),
        ]
        .into_iter()
        .collect();

        let table = format_balance_table(&balances, &AmountFormatter::default());
        assert!(table.contains("alice"));
        assert!(table.contains("+$60.00"));
        assert!(table.contains("-$30.00"));
        assert!(table.contains("settled"));
    }

    #[test]
    fn test_settlement_table_contents() {
        let settlements = vec![Settlement::new("bob", "alice", 30.0)];
        let table = format_settlement_table(&settlements, &AmountFormatter::default());
        assert!(table.contains("bob"));
        assert!(table.contains("$30.00"));
    }

    #[test]
    fn test_empty_tables() {
        let fmt = AmountFormatter::default();
        assert_eq!(format_settlement_table(&[], &fmt), "Everyone is settled up.");
        assert_eq!(format_balance_table(&Balances::new(), &fmt), "No participants.");
        assert_eq!(format_share_table(&[], &fmt), "No shares computed.");
    }

    #[test]
    fn test_share_table_contents() {
        let shares = vec![Share::new("a", 25.0, 25.0)];
        let table = format_share_table(&shares, &AmountFormatter::default());
        assert!(table.contains("$25.00"));
        assert!(table.contains("25%"));
    }
}
