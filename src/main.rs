use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use splitbill::cli::{
    handle_balances_command, handle_report_command, handle_settle_command,
    handle_shares_command, handle_summary_command, BalancesArgs, ReportArgs, SettleArgs,
    SharesArgs, SummaryArgs,
};
use splitbill::config::{Settings, SplitPaths};

#[derive(Parser)]
#[command(
    name = "splitbill",
    version,
    about = "Split group expenses and work out who pays whom",
    long_about = "splitbill computes per-person shares for shared expenses, folds an \
                  event's expenses into net balances and suggests a short list of \
                  transfers that settles everyone up."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split one amount among participants
    Shares(SharesArgs),

    /// Show net balances for an event
    #[command(alias = "bal")]
    Balances(BalancesArgs),

    /// Suggest transfers that settle an event
    Settle(SettleArgs),

    /// Full event report, printed or exported
    Report(ReportArgs),

    /// A user's balance across several events
    Summary(SummaryArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings, cli.verbose);

    match cli.command {
        Some(Commands::Shares(args)) => handle_shares_command(&settings, args)?,
        Some(Commands::Balances(args)) => handle_balances_command(&settings, args)?,
        Some(Commands::Settle(args)) => handle_settle_command(&settings, args)?,
        Some(Commands::Report(args)) => handle_report_command(&settings, args)?,
        Some(Commands::Summary(args)) => handle_summary_command(&settings, args)?,
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("splitbill Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Exports dir:      {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Decimal places:  {}", settings.decimal_places);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("splitbill - split group expenses and settle up");
            println!();
            println!("Run 'splitbill --help' for usage information.");
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins, then `-v`, then the settings file.
fn init_tracing(settings: &Settings, verbose: u8) {
    let level = match verbose {
        0 => settings.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
