//! Summary CLI command
//!
//! A user's balance across several event files.

use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::AmountFormatter;
use crate::error::SplitResult;
use crate::export::export_report_to_file;
use crate::models::ParticipantId;
use crate::reports::UserBalanceReport;
use crate::storage::load_events;

use super::output::{resolve_export_format, ExportFormatArg};

/// Arguments for `splitbill summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// User to summarize
    pub user: String,

    /// Event snapshot files (JSON)
    #[arg(required = true)]
    pub events: Vec<PathBuf>,

    /// Export to a file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the output file extension)
    #[arg(short, long, value_enum, requires = "output")]
    pub format: Option<ExportFormatArg>,
}

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> SplitResult<()> {
    let events = load_events(&args.events)?;
    let report = UserBalanceReport::generate(&ParticipantId::from(args.user), &events)?;

    if let Some(path) = args.output {
        let format = resolve_export_format(&path, args.format)?;
        export_report_to_file(&report, format, &path)?;
        println!("Summary exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&AmountFormatter::from_settings(settings)));
    }

    Ok(())
}
