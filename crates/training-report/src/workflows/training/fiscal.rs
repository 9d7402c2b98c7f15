use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month in which a fiscal year begins.
pub const FISCAL_YEAR_START_MONTH: u32 = 7;

/// Institutional fiscal year, named for the calendar year in which it ends.
///
/// Fiscal year `N` runs from July 1 of `N - 1` through June 30 of `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiscalYear(pub i32);

impl FiscalYear {
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= FISCAL_YEAR_START_MONTH {
            Self(date.year() + 1)
        } else {
            Self(date.year())
        }
    }

    pub fn starts_on(self) -> Option<NaiveDate> {
        self.0
            .checked_sub(1)
            .and_then(|year| NaiveDate::from_ymd_opt(year, FISCAL_YEAR_START_MONTH, 1))
    }

    pub fn ends_on(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, FISCAL_YEAR_START_MONTH - 1, 30)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        Self::containing(date) == self
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FY{}", self.0)
    }
}
