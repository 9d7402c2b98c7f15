use super::super::domain::{Trainee, TraineeId};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Number of distinct trainees holding at least one completion of each
/// training.
///
/// Keys are ordered ascending. Counts are taken over any record of the
/// training, not only latest completions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletionCounts(BTreeMap<String, usize>);

impl CompletionCounts {
    pub fn get(&self, training: &str) -> Option<usize> {
        self.0.get(training).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(training, count)| (training.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn count_completions(trainees: &[Trainee]) -> CompletionCounts {
    let completers = trainees.iter().fold(
        BTreeMap::<&str, BTreeSet<&TraineeId>>::new(),
        |mut completers, trainee| {
            for completion in &trainee.completions {
                completers
                    .entry(completion.name.as_str())
                    .or_default()
                    .insert(&trainee.name);
            }
            completers
        },
    );

    CompletionCounts(
        completers
            .into_iter()
            .map(|(training, trainees)| (training.to_string(), trainees.len()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::training::domain::CompletionEvent;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn repeat_completions_count_once_per_trainee() {
        let trainees = vec![
            Trainee::new(
                "Alice Jones",
                vec![CompletionEvent::new("Lab Safety", date(2023, 1, 5), None)],
            ),
            Trainee::new(
                "Bob Lee",
                vec![
                    CompletionEvent::new("Lab Safety", date(2023, 1, 5), None),
                    CompletionEvent::new("Lab Safety", date(2023, 9, 1), None),
                ],
            ),
        ];

        let counts = count_completions(&trainees);
        assert_eq!(counts.get("Lab Safety"), Some(2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn trainings_are_listed_in_ascending_order() {
        let trainees = vec![
            Trainee::new(
                "Alice Jones",
                vec![
                    CompletionEvent::new("X-Ray Safety", date(2023, 1, 5), None),
                    CompletionEvent::new("Electrical Safety for Labs", date(2023, 1, 5), None),
                ],
            ),
            Trainee::new(
                "Bob Lee",
                vec![CompletionEvent::new("Lab Safety", date(2023, 1, 5), None)],
            ),
            Trainee::new("Cara Diaz", Vec::new()),
        ];

        let counts = count_completions(&trainees);
        let trainings: Vec<&str> = counts.iter().map(|(training, _)| training).collect();
        assert_eq!(
            trainings,
            vec!["Electrical Safety for Labs", "Lab Safety", "X-Ray Safety"]
        );
        assert_eq!(
            serde_json::to_string(&counts).expect("serializes"),
            r#"{"Electrical Safety for Labs":1,"Lab Safety":1,"X-Ray Safety":1}"#
        );
    }

    #[test]
    fn records_sharing_a_name_count_as_one_trainee() {
        let trainees = vec![
            Trainee::new(
                "Bob Lee",
                vec![CompletionEvent::new("Lab Safety", date(2023, 1, 5), None)],
            ),
            Trainee::new(
                "Bob Lee",
                vec![
                    CompletionEvent::new("Lab Safety", date(2023, 9, 1), None),
                    CompletionEvent::new("X-Ray Safety", date(2023, 9, 1), None),
                ],
            ),
        ];

        let counts = count_completions(&trainees);
        assert_eq!(counts.get("Lab Safety"), Some(1));
        assert_eq!(counts.get("X-Ray Safety"), Some(1));
    }

    #[test]
    fn empty_roster_yields_no_counts() {
        assert!(count_completions(&[]).is_empty());
    }
}
