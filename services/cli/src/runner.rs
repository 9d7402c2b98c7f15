use crate::render::{render_fiscal_year, render_summary};
use chrono::NaiveDate;
use clap::Args;
use std::path::{Path, PathBuf};
use training_report::config::{AppConfig, ReportSettings};
use training_report::documents::{write_document, RosterDocument};
use training_report::error::AppError;
use training_report::telemetry;
use training_report::workflows::training::{parse_date, FiscalYear, TrainingReports};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    /// Settings document (defaults to TRAINING_SETTINGS or appsettings.json)
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,
    /// Override the fiscal year reported on
    #[arg(long)]
    pub(crate) fiscal_year: Option<i32>,
    /// Override the expiration status date
    #[arg(long, value_parser = parse_cli_date)]
    pub(crate) status_date: Option<NaiveDate>,
    /// Override the trainings listed in the fiscal year report (repeatable)
    #[arg(long = "training")]
    pub(crate) trainings: Vec<String>,
    /// Print a summary of the generated reports
    #[arg(long)]
    pub(crate) print: bool,
    /// Compute the reports without writing any documents
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[derive(Args, Debug)]
pub(crate) struct FiscalYearArgs {
    /// Calendar date to classify
    #[arg(value_parser = parse_cli_date)]
    pub(crate) date: NaiveDate,
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|err| err.to_string())
}

/// Reports built by one run and the documents written for them.
#[derive(Debug)]
pub(crate) struct RunOutcome {
    pub(crate) reports: TrainingReports,
    pub(crate) written: Vec<PathBuf>,
}

pub(crate) fn run_reports(args: RunArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let settings_path = args.settings.clone().unwrap_or(config.settings_path);
    let print = args.print;
    let outcome = execute(&settings_path, args)?;

    if print {
        render_summary(&outcome.reports);
    }

    Ok(())
}

/// Loads settings and roster, applies overrides, builds every report and,
/// unless this is a dry run, writes the three documents.
pub(crate) fn execute(settings_path: &Path, args: RunArgs) -> Result<RunOutcome, AppError> {
    let RunArgs {
        fiscal_year,
        status_date,
        trainings,
        dry_run,
        ..
    } = args;

    let settings = ReportSettings::from_path(settings_path)?;
    info!(path = %settings_path.display(), "loaded settings");

    let mut request = settings.request()?;
    if let Some(year) = fiscal_year {
        request.fiscal_year = FiscalYear(year);
    }
    if let Some(date) = status_date {
        request.status_date = date;
    }
    if !trainings.is_empty() {
        request.trainings = trainings;
    }

    let trainees = RosterDocument::from_path(&settings.input_file_path)?;
    info!(
        path = %settings.input_file_path.display(),
        trainees = trainees.len(),
        "loaded roster"
    );

    let reports = TrainingReports::generate(&trainees, &request)?;

    if dry_run {
        info!("dry run: no documents written");
        return Ok(RunOutcome {
            reports,
            written: Vec::new(),
        });
    }

    write_document(&reports.completion_counts, &settings.counts_output_path)?;
    write_document(&reports.fiscal_year_roster, &settings.fiscal_roster_output_path)?;
    write_document(&reports.expirations, &settings.expirations_output_path)?;
    info!(
        counts = %settings.counts_output_path.display(),
        fiscal_year_roster = %settings.fiscal_roster_output_path.display(),
        expirations = %settings.expirations_output_path.display(),
        "wrote report documents"
    );

    Ok(RunOutcome {
        reports,
        written: vec![
            settings.counts_output_path,
            settings.fiscal_roster_output_path,
            settings.expirations_output_path,
        ],
    })
}

pub(crate) fn run_fiscal_year(args: FiscalYearArgs) {
    render_fiscal_year(args.date, FiscalYear::containing(args.date));
}
