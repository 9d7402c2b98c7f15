use super::dates::{deserialize_date, deserialize_optional_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identity of a trainee.
///
/// Rosters carry no surrogate key, so the display name is the identity and
/// must be unique across the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraineeId(pub String);

impl TraineeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraineeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TraineeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A person on the roster together with every completion on record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trainee {
    pub name: TraineeId,
    pub completions: Vec<CompletionEvent>,
}

impl Trainee {
    pub fn new(name: impl Into<String>, completions: Vec<CompletionEvent>) -> Self {
        Self {
            name: TraineeId::new(name),
            completions,
        }
    }

    pub fn completions_of<'a>(
        &'a self,
        training: &'a str,
    ) -> impl Iterator<Item = &'a CompletionEvent> + 'a {
        self.completions
            .iter()
            .filter(move |completion| completion.name == training)
    }
}

/// One completion of a training. `expires == None` means it never expires.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompletionEvent {
    pub name: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub timestamp: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub expires: Option<NaiveDate>,
}

impl CompletionEvent {
    pub fn new(name: impl Into<String>, timestamp: NaiveDate, expires: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            timestamp,
            expires,
        }
    }
}

/// Last whitespace-separated token of a name.
pub fn surname(name: &str) -> &str {
    name.split_whitespace().next_back().unwrap_or(name)
}

/// Orders names by surname, then by the full name.
pub fn cmp_by_surname(a: &str, b: &str) -> Ordering {
    surname(a).cmp(surname(b)).then_with(|| a.cmp(b))
}
