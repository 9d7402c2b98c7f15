use crate::runner::{run_fiscal_year, run_reports, FiscalYearArgs, RunArgs};
use clap::{Parser, Subcommand};
use training_report::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "training-report",
    about = "Build completion, fiscal-year and expiration reports from training records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate all three training reports (default command)
    Run(RunArgs),
    /// Show the fiscal year a date falls in
    FiscalYear(FiscalYearArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => run_reports(args),
        Command::FiscalYear(args) => {
            run_fiscal_year(args);
            Ok(())
        }
    }
}
