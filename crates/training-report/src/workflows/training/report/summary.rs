use super::super::fiscal::FiscalYear;
use super::{ExpirationStatus, TrainingReports};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSizeEntry {
    pub training: String,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub trainee_count: usize,
    pub training_count: usize,
    pub fiscal_year: FiscalYear,
    pub fiscal_year_start: Option<NaiveDate>,
    pub fiscal_year_end: Option<NaiveDate>,
    pub roster_sizes: Vec<RosterSizeEntry>,
    pub status_date: NaiveDate,
    pub trainees_flagged: usize,
    pub expired: usize,
    pub expiring_soon: usize,
}

impl TrainingReports {
    pub fn summary(&self) -> ReportSummary {
        let fiscal_year = self.fiscal_year_roster.fiscal_year();
        let roster_sizes = self
            .fiscal_year_roster
            .iter()
            .map(|(training, trainees)| RosterSizeEntry {
                training: training.to_string(),
                completed: trainees.len(),
            })
            .collect();

        ReportSummary {
            trainee_count: self.trainee_count(),
            training_count: self.completion_counts.len(),
            fiscal_year,
            fiscal_year_start: fiscal_year.starts_on(),
            fiscal_year_end: fiscal_year.ends_on(),
            roster_sizes,
            status_date: self.expirations.as_of(),
            trainees_flagged: self.expirations.len(),
            expired: self.expirations.count(ExpirationStatus::Expired),
            expiring_soon: self.expirations.count(ExpirationStatus::ExpiringSoon),
        }
    }
}
