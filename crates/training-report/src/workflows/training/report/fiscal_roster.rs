use super::super::domain::{cmp_by_surname, Trainee, TraineeId};
use super::super::fiscal::FiscalYear;
use super::super::latest::LatestCompletionIndex;
use super::ReportError;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use tracing::debug;

/// Trainees whose latest completion of each requested training falls in a
/// fiscal year. Trainings keep the order they were requested in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalYearRoster {
    fiscal_year: FiscalYear,
    entries: Vec<(String, Vec<TraineeId>)>,
}

impl FiscalYearRoster {
    pub fn fiscal_year(&self) -> FiscalYear {
        self.fiscal_year
    }

    pub fn get(&self, training: &str) -> Option<&[TraineeId]> {
        self.entries
            .iter()
            .find(|(name, _)| name == training)
            .map(|(_, trainees)| trainees.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TraineeId])> {
        self.entries
            .iter()
            .map(|(training, trainees)| (training.as_str(), trainees.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FiscalYearRoster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(training, trainees)| (training, trainees)))
    }
}

pub fn build_fiscal_year_roster(
    trainees: &[Trainee],
    index: &LatestCompletionIndex,
    trainings: &[String],
    fiscal_year: FiscalYear,
) -> Result<FiscalYearRoster, ReportError> {
    let mut entries: Vec<(String, Vec<TraineeId>)> = Vec::with_capacity(trainings.len());

    for training in trainings {
        if entries.iter().any(|(name, _)| name == training) {
            continue;
        }

        let mut completed: HashSet<&TraineeId> = HashSet::new();
        for trainee in trainees {
            for completion in trainee.completions_of(training) {
                if index.is_latest(&trainee.name, completion)?
                    && fiscal_year.contains(completion.timestamp)
                {
                    completed.insert(&trainee.name);
                }
            }
        }

        let mut names: Vec<TraineeId> = completed.into_iter().cloned().collect();
        names.sort_by(|a, b| cmp_by_surname(a.as_str(), b.as_str()));

        debug!(%training, %fiscal_year, completed = names.len(), "built fiscal year roster entry");
        entries.push((training.clone(), names));
    }

    Ok(FiscalYearRoster {
        fiscal_year,
        entries,
    })
}
