use super::super::domain::{cmp_by_surname, Trainee, TraineeId};
use super::super::latest::LatestCompletionIndex;
use super::ReportError;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Lead time before expiration during which a training is "expiring soon".
const EXPIRING_SOON_WINDOW: Months = Months::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpirationStatus {
    #[serde(rename = "Expired")]
    Expired,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
}

impl ExpirationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring Soon",
        }
    }

    /// Classifies an expiration date against `as_of`.
    ///
    /// A training is expired the day after its expiration date, so an
    /// expiration equal to `as_of` is still current.
    pub fn classify(expires: NaiveDate, as_of: NaiveDate) -> Option<Self> {
        if expires < as_of {
            return Some(Self::Expired);
        }

        let soon = expires
            .checked_sub_months(EXPIRING_SOON_WINDOW)
            .map_or(true, |soon| soon < as_of);
        soon.then_some(Self::ExpiringSoon)
    }
}

/// Reportable statuses for one trainee, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraineeExpirations {
    pub trainee: TraineeId,
    trainings: Vec<(String, ExpirationStatus)>,
}

impl TraineeExpirations {
    fn new(trainee: TraineeId) -> Self {
        Self {
            trainee,
            trainings: Vec::new(),
        }
    }

    fn record(&mut self, training: &str, status: ExpirationStatus) {
        match self.trainings.iter_mut().find(|(name, _)| name == training) {
            Some((_, existing)) => *existing = status,
            None => self.trainings.push((training.to_string(), status)),
        }
    }

    pub fn status(&self, training: &str) -> Option<ExpirationStatus> {
        self.trainings
            .iter()
            .find(|(name, _)| name == training)
            .map(|(_, status)| *status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ExpirationStatus)> {
        self.trainings
            .iter()
            .map(|(training, status)| (training.as_str(), *status))
    }
}

impl Serialize for TraineeExpirations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.trainings.iter().map(|(training, status)| (training, status)))
    }
}

/// Trainees with expired or soon-to-expire latest completions as of a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirationReport {
    as_of: NaiveDate,
    entries: Vec<TraineeExpirations>,
}

impl ExpirationReport {
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn get(&self, trainee: &TraineeId) -> Option<&TraineeExpirations> {
        self.entries.iter().find(|entry| &entry.trainee == trainee)
    }

    pub fn status(&self, trainee: &TraineeId, training: &str) -> Option<ExpirationStatus> {
        self.get(trainee).and_then(|entry| entry.status(training))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraineeExpirations> {
        self.entries.iter()
    }

    pub fn count(&self, status: ExpirationStatus) -> usize {
        self.entries
            .iter()
            .flat_map(TraineeExpirations::iter)
            .filter(|(_, found)| *found == status)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ExpirationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|entry| (&entry.trainee, entry)))
    }
}

pub fn build_expiration_report(
    trainees: &[Trainee],
    index: &LatestCompletionIndex,
    as_of: NaiveDate,
) -> Result<ExpirationReport, ReportError> {
    let mut ordered: Vec<&Trainee> = trainees.iter().collect();
    ordered.sort_by(|a, b| cmp_by_surname(a.name.as_str(), b.name.as_str()));

    let mut entries: Vec<TraineeExpirations> = Vec::new();
    let mut positions: HashMap<&TraineeId, usize> = HashMap::new();

    for trainee in ordered {
        for completion in &trainee.completions {
            let Some(expires) = completion.expires else {
                continue;
            };
            if !index.is_latest(&trainee.name, completion)? {
                continue;
            }
            let Some(status) = ExpirationStatus::classify(expires, as_of) else {
                continue;
            };

            let position = *positions.entry(&trainee.name).or_insert_with(|| {
                entries.push(TraineeExpirations::new(trainee.name.clone()));
                entries.len() - 1
            });
            entries[position].record(&completion.name, status);
        }
    }

    Ok(ExpirationReport { as_of, entries })
}
