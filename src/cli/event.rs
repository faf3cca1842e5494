//! Event CLI commands
//!
//! Balances, settlements and full reports for one event file.

use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{format_balance_table, format_settlement_table, AmountFormatter};
use crate::error::{SplitError, SplitResult};
use crate::export::export_report_to_file;
use crate::reports::EventReport;
use crate::services::{apply_settlements, SETTLEMENT_TOLERANCE};
use crate::storage::load_event;

use super::output::{print_json, resolve_export_format, ExportFormatArg, OutputFormat};

/// Arguments for `splitbill balances`
#[derive(Args, Debug)]
pub struct BalancesArgs {
    /// Event snapshot file (JSON)
    pub event: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for `splitbill settle`
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Event snapshot file (JSON)
    pub event: PathBuf,

    /// Apply the transfers to the balances and check everyone ends up settled
    #[arg(long)]
    pub verify: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for `splitbill report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Event snapshot file (JSON)
    pub event: PathBuf,

    /// Export to a file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the output file extension)
    #[arg(short, long, value_enum, requires = "output")]
    pub format: Option<ExportFormatArg>,
}

/// Handle the balances command
pub fn handle_balances_command(settings: &Settings, args: BalancesArgs) -> SplitResult<()> {
    let report = EventReport::generate(&load_event(&args.event)?);

    match args.format {
        OutputFormat::Json => print_json(&report.balances)?,
        OutputFormat::Table => {
            let fmt = AmountFormatter::from_settings(settings);
            println!("Balances for {}", report.event_id);
            println!("{}", format_balance_table(&report.balances, &fmt));
        }
    }

    Ok(())
}

/// Handle the settle command
pub fn handle_settle_command(settings: &Settings, args: SettleArgs) -> SplitResult<()> {
    let report = EventReport::generate(&load_event(&args.event)?);

    match args.format {
        OutputFormat::Json => print_json(&report.settlements)?,
        OutputFormat::Table => {
            let fmt = AmountFormatter::from_settings(settings);
            println!("Suggested transfers for {}", report.event_id);
            println!("{}", format_settlement_table(&report.settlements, &fmt));
        }
    }

    if args.verify {
        let adjusted = apply_settlements(&report.balances, &report.settlements);
        if !adjusted.is_settled(SETTLEMENT_TOLERANCE) {
            let unsettled: Vec<String> = adjusted
                .iter()
                .filter(|(_, b)| b.abs() > SETTLEMENT_TOLERANCE)
                .map(|(id, b)| format!("{} ({:.2})", id, b))
                .collect();
            return Err(SplitError::Validation(format!(
                "Transfers leave balances open: {}",
                unsettled.join(", ")
            )));
        }
        tracing::info!(
            event = %report.event_id,
            transfers = report.settlements.len(),
            "settlement verified"
        );
        if args.format == OutputFormat::Table {
            println!(
                "Verified: {} transfer(s) settle all {} participant(s)",
                report.settlements.len(),
                report.balances.len()
            );
        }
    }

    Ok(())
}

/// Handle the report command
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> SplitResult<()> {
    let report = EventReport::generate(&load_event(&args.event)?);

    if let Some(path) = args.output {
        let format = resolve_export_format(&path, args.format)?;
        export_report_to_file(&report, format, &path)?;
        println!("Report exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&AmountFormatter::from_settings(settings)));
    }

    Ok(())
}
