mod counts;
mod expiration;
mod fiscal_roster;
pub mod summary;

pub use counts::{count_completions, CompletionCounts};
pub use expiration::{
    build_expiration_report, ExpirationReport, ExpirationStatus, TraineeExpirations,
};
pub use fiscal_roster::{build_fiscal_year_roster, FiscalYearRoster};
pub use summary::ReportSummary;

use super::domain::{Trainee, TraineeId};
use super::fiscal::FiscalYear;
use super::latest::LatestCompletionIndex;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("no latest completion indexed for trainee '{trainee}' and training '{training}'")]
    MissingLatest { trainee: TraineeId, training: String },
}

/// Parameters shared by a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub trainings: Vec<String>,
    pub fiscal_year: FiscalYear,
    pub status_date: NaiveDate,
}

/// The three derived documents, computed from one roster snapshot.
#[derive(Debug, Clone)]
pub struct TrainingReports {
    pub completion_counts: CompletionCounts,
    pub fiscal_year_roster: FiscalYearRoster,
    pub expirations: ExpirationReport,
    trainee_count: usize,
}

impl TrainingReports {
    /// Resolves latest completions once and builds every report from it.
    pub fn generate(trainees: &[Trainee], request: &ReportRequest) -> Result<Self, ReportError> {
        let index = LatestCompletionIndex::resolve(trainees);

        let completion_counts = count_completions(trainees);
        let fiscal_year_roster = build_fiscal_year_roster(
            trainees,
            &index,
            &request.trainings,
            request.fiscal_year,
        )?;
        let expirations = build_expiration_report(trainees, &index, request.status_date)?;

        info!(
            records = trainees.len(),
            trainees = index.trainee_count(),
            trainings = completion_counts.len(),
            fiscal_year = %request.fiscal_year,
            status_date = %request.status_date,
            "generated training reports"
        );

        Ok(Self {
            completion_counts,
            fiscal_year_roster,
            expirations,
            trainee_count: index.trainee_count(),
        })
    }

    pub fn trainee_count(&self) -> usize {
        self.trainee_count
    }
}
