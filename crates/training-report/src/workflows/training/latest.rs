use super::domain::{CompletionEvent, Trainee, TraineeId};
use super::report::ReportError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Most recent completion date per trainee and training.
///
/// Every report consults this index to decide whether a completion is the one
/// that counts; anything older than the indexed date is superseded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestCompletionIndex {
    entries: HashMap<TraineeId, HashMap<String, NaiveDate>>,
}

impl LatestCompletionIndex {
    pub fn resolve(trainees: &[Trainee]) -> Self {
        let entries = trainees.iter().fold(
            HashMap::<TraineeId, HashMap<String, NaiveDate>>::new(),
            |mut entries, trainee| {
                let latest = entries.entry(trainee.name.clone()).or_default();
                for completion in &trainee.completions {
                    latest
                        .entry(completion.name.clone())
                        .and_modify(|current| *current = (*current).max(completion.timestamp))
                        .or_insert(completion.timestamp);
                }
                entries
            },
        );

        Self { entries }
    }

    pub fn latest(&self, trainee: &TraineeId, training: &str) -> Result<NaiveDate, ReportError> {
        self.entries
            .get(trainee)
            .and_then(|trainings| trainings.get(training))
            .copied()
            .ok_or_else(|| ReportError::MissingLatest {
                trainee: trainee.clone(),
                training: training.to_string(),
            })
    }

    /// Whether `completion` is the trainee's most recent completion of its training.
    pub fn is_latest(
        &self,
        trainee: &TraineeId,
        completion: &CompletionEvent,
    ) -> Result<bool, ReportError> {
        Ok(self.latest(trainee, &completion.name)? == completion.timestamp)
    }

    /// Number of distinct trainees, including those with no completions.
    pub fn trainee_count(&self) -> usize {
        self.entries.len()
    }
}
