use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;

use payslip_cli::utils::{parse_amount, parse_regime};
use payslip_cli::{commands, logging};
use payslip_core::TaxRegime;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Salary slip generator with income tax and professional tax deductions.
#[derive(Debug, Parser)]
#[command(name = "payslip", version)]
struct Cli {
    /// Increase log detail (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate annual income tax and monthly TDS.
    Estimate {
        /// Annual taxable income, already net of exemptions (e.g. 12,00,000).
        #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
        income: Decimal,

        /// Tax regime: old or new.
        #[arg(long, value_parser = parse_regime, default_value = "old")]
        regime: TaxRegime,

        /// Show both regimes side by side.
        #[arg(long, conflicts_with = "regime")]
        compare: bool,
    },

    /// Look up monthly professional tax for a state.
    ProfessionalTax {
        /// State name, matched case-sensitively.
        #[arg(long)]
        state: String,

        /// Monthly gross income.
        #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
        gross: Decimal,
    },

    /// Print the income tax slab table.
    Brackets {
        /// Tax regime: old or new. Prints both when omitted.
        #[arg(long, value_parser = parse_regime)]
        regime: Option<TaxRegime>,
    },

    /// Build and print a salary slip from a TOML document.
    Slip {
        /// Path to the slip document.
        #[arg(short, long)]
        file: PathBuf,

        /// Employee roster CSV used to resolve `employee_code`.
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Print the slip as written, without professional tax or TDS.
        #[arg(long, default_value_t = false)]
        no_statutory: bool,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Estimate { .. } => "estimate",
            Command::ProfessionalTax { .. } => "professional-tax",
            Command::Brackets { .. } => "brackets",
            Command::Slip { .. } => "slip",
        }
    }
}

fn run(command: &Command) -> anyhow::Result<String> {
    match command {
        Command::Estimate {
            income,
            compare: true,
            ..
        } => Ok(commands::comparison_report(*income)),
        Command::Estimate { income, regime, .. } => Ok(commands::estimate_report(*income, *regime)),
        Command::ProfessionalTax { state, gross } => {
            Ok(commands::professional_tax_report(state, *gross))
        }
        Command::Brackets { regime: Some(regime) } => commands::brackets_report(*regime),
        Command::Brackets { regime: None } => {
            let tables = TaxRegime::ALL
                .iter()
                .map(|regime| commands::brackets_report(*regime))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(tables.join("\n\n"))
        }
        Command::Slip {
            file,
            roster,
            no_statutory,
        } => commands::slip_report(file, roster.as_deref(), !no_statutory),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;
    debug!(command = cli.command.name(), "starting");

    match run(&cli.command) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(error) => {
            logging::log_command_error(cli.command.name(), &error);
            Err(error)
        }
    }
}
