//! Shares CLI command
//!
//! Splits a single amount among participants without an event file.

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{format_share_table, AmountFormatter};
use crate::error::{SplitError, SplitResult};
use crate::models::{CustomShares, ParticipantId, SplitPolicy};
use crate::services::calculate_expense_shares;

use super::output::{print_json, OutputFormat};

/// Arguments for `splitbill shares`
#[derive(Args, Debug)]
pub struct SharesArgs {
    /// Total amount to split
    pub amount: f64,

    /// Participant ids, in split order
    #[arg(short, long = "participant", required = true)]
    pub participants: Vec<String>,

    /// Split policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Equal)]
    pub policy: PolicyArg,

    /// Override for one participant, as ID=VALUE (percentage or amount)
    #[arg(short, long = "share")]
    pub shares: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Split policy options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Same amount for everyone
    Equal,
    /// Overrides are percentages of the total
    Percentage,
    /// Overrides are amounts
    Custom,
}

impl From<PolicyArg> for SplitPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Equal => SplitPolicy::Equal,
            PolicyArg::Percentage => SplitPolicy::Percentage,
            PolicyArg::Custom => SplitPolicy::Custom,
        }
    }
}

/// Handle the shares command
pub fn handle_shares_command(settings: &Settings, args: SharesArgs) -> SplitResult<()> {
    let policy: SplitPolicy = args.policy.into();
    if !args.amount.is_finite() || args.amount <= 0.0 {
        return Err(SplitError::Validation(format!(
            "Amount must be positive, got {}",
            args.amount
        )));
    }

    let participant_ids: Vec<ParticipantId> =
        args.participants.iter().map(|p| ParticipantId::from(p.as_str())).collect();
    let overrides = parse_overrides(&args.shares)?;

    if policy.uses_overrides() && overrides.is_empty() {
        tracing::warn!(%policy, "no --share ID=VALUE entries given, nothing to split");
    }

    let shares = calculate_expense_shares(
        args.amount,
        &policy,
        &participant_ids,
        Some(&overrides).filter(|o| !o.is_empty()),
    );

    match args.format {
        OutputFormat::Json => print_json(&shares)?,
        OutputFormat::Table => {
            let fmt = AmountFormatter::from_settings(settings);
            println!("Split of {} ({})", fmt.format(args.amount), policy);
            println!("{}", format_share_table(&shares, &fmt));
        }
    }

    Ok(())
}

/// Parse `ID=VALUE` override arguments
pub fn parse_overrides(raw: &[String]) -> SplitResult<CustomShares> {
    let mut overrides = CustomShares::new();

    for entry in raw {
        let (id, value) = entry.split_once('=').ok_or_else(|| {
            SplitError::Validation(format!("Invalid share '{}'. Use ID=VALUE", entry))
        })?;

        let id = id.trim();
        if id.is_empty() {
            return Err(SplitError::Validation(format!(
                "Invalid share '{}': missing participant id",
                entry
            )));
        }

        let value: f64 = value.trim().parse().map_err(|_| {
            SplitError::Validation(format!("Invalid share value in '{}'", entry))
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(SplitError::Validation(format!(
                "Share value in '{}' must be a non-negative number",
                entry
            )));
        }

        overrides.insert(ParticipantId::from(id), value);
    }

    Ok(overrides)
}
