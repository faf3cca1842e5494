//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine and reports.

pub mod event;
pub mod output;
pub mod shares;
pub mod summary;

pub use event::{
    handle_balances_command, handle_report_command, handle_settle_command, BalancesArgs,
    ReportArgs, SettleArgs,
};
pub use output::{ExportFormatArg, OutputFormat};
pub use shares::{handle_shares_command, PolicyArg, SharesArgs};
pub use summary::{handle_summary_command, SummaryArgs};
