pub mod dates;
pub mod domain;
mod fiscal;
mod latest;
pub mod report;

pub use dates::{parse_date, DateParseError};
pub use domain::{cmp_by_surname, surname, CompletionEvent, Trainee, TraineeId};
pub use fiscal::FiscalYear;
pub use latest::LatestCompletionIndex;
pub use report::{ReportError, ReportRequest, TrainingReports};
