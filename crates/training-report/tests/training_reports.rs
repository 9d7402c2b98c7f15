use chrono::NaiveDate;
use serde_json::json;
use std::path::PathBuf;
use training_report::config::ReportSettings;
use training_report::documents::{read_document, write_document, RosterDocument};
use training_report::workflows::training::report::ExpirationStatus;
use training_report::workflows::training::{
    FiscalYear, LatestCompletionIndex, ReportRequest, TraineeId, TrainingReports,
};

const ROSTER: &str = r#"[
  {
    "name": "John Smith",
    "completions": [
      { "name": "Lab Safety", "timestamp": "10/20/2022", "expires": "10/20/2023" },
      { "name": "Lab Safety", "timestamp": "10/20/2022", "expires": "10/20/2023" },
      { "name": "X-Ray Safety", "timestamp": "2023-06-30" }
    ]
  },
  {
    "name": "Jane Anderson",
    "completions": [
      { "name": "X-Ray Safety", "timestamp": "2023-08-15", "expires": "2024-08-15" },
      { "name": "Lab Safety", "timestamp": "2022-09-01", "expires": "2023-09-30" },
      { "name": "X-Ray Safety", "timestamp": "2024-02-10T09:30:00", "expires": "2025-02-10" }
    ]
  },
  {
    "name": "Alex Brown",
    "completions": [
      { "name": "Lab Safety", "timestamp": "2021-07-01", "expires": "2022-07-01" },
      { "name": "X-Ray Safety", "timestamp": "2023-07-01", "expires": "2024-01-01" },
      { "name": "Lab Safety", "timestamp": "2024-06-30", "expires": "2025-06-30" }
    ]
  }
]"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn request() -> ReportRequest {
    ReportRequest {
        trainings: vec![
            "X-Ray Safety".to_string(),
            "Lab Safety".to_string(),
            "Electrical Safety for Labs".to_string(),
        ],
        fiscal_year: FiscalYear(2024),
        status_date: date(2023, 10, 1),
    }
}

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "training-report-{label}-{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn reports_match_hand_computed_documents() {
    let trainees = RosterDocument::from_reader(ROSTER.as_bytes()).expect("roster parses");
    let reports = TrainingReports::generate(&trainees, &request()).expect("reports build");

    assert_eq!(
        serde_json::to_value(&reports.completion_counts).expect("counts serialize"),
        json!({ "Lab Safety": 3, "X-Ray Safety": 3 })
    );

    assert_eq!(
        serde_json::to_string(&reports.fiscal_year_roster).expect("roster serializes"),
        r#"{"X-Ray Safety":["Jane Anderson","Alex Brown"],"Lab Safety":["Alex Brown"],"Electrical Safety for Labs":[]}"#
    );

    assert_eq!(
        serde_json::to_string(&reports.expirations).expect("expirations serialize"),
        r#"{"Jane Anderson":{"Lab Safety":"Expired"},"John Smith":{"Lab Safety":"Expiring Soon"}}"#
    );
}

#[test]
fn superseded_records_never_reach_reports() {
    let trainees = RosterDocument::from_reader(ROSTER.as_bytes()).expect("roster parses");
    let index = LatestCompletionIndex::resolve(&trainees);
    let alex = TraineeId::from("Alex Brown");

    assert_eq!(index.latest(&alex, "Lab Safety"), Ok(date(2024, 6, 30)));

    let reports = TrainingReports::generate(&trainees, &request()).expect("reports build");
    assert_eq!(reports.expirations.status(&alex, "Lab Safety"), None);
    assert_eq!(
        reports
            .expirations
            .status(&TraineeId::from("Jane Anderson"), "Lab Safety"),
        Some(ExpirationStatus::Expired)
    );
}

#[test]
fn generation_is_reproducible() {
    let trainees = RosterDocument::from_reader(ROSTER.as_bytes()).expect("roster parses");
    let first = TrainingReports::generate(&trainees, &request()).expect("reports build");
    let second = TrainingReports::generate(&trainees, &request()).expect("reports build");

    assert_eq!(first.completion_counts, second.completion_counts);
    assert_eq!(first.fiscal_year_roster, second.fiscal_year_roster);
    assert_eq!(first.expirations, second.expirations);
}

#[test]
fn settings_drive_a_full_run_through_documents() {
    let dir = scratch_dir("e2e");
    let roster_path = dir.join("trainings.json");
    std::fs::write(&roster_path, ROSTER).expect("write roster");

    let settings_path = dir.join("appsettings.json");
    let settings = json!({
        "InputFilePath": roster_path,
        "OutputFilePath1": dir.join("out/counts.json"),
        "OutputFilePath2": dir.join("out/fiscal_year.json"),
        "OutputFilePath3": dir.join("out/expirations.json"),
        "TrainingTypes": ["X-Ray Safety", "Lab Safety", "Electrical Safety for Labs"],
        "FiscalYear": 2024,
        "StatusDate": "2023-10-01"
    });
    write_document(&settings, &settings_path).expect("write settings");

    let settings = ReportSettings::from_path(&settings_path).expect("settings load");
    let trainees = RosterDocument::from_path(&settings.input_file_path).expect("roster loads");
    let reports = TrainingReports::generate(&trainees, &settings.request().expect("request"))
        .expect("reports build");

    write_document(&reports.completion_counts, &settings.counts_output_path).expect("write counts");
    write_document(&reports.fiscal_year_roster, &settings.fiscal_roster_output_path)
        .expect("write roster");
    write_document(&reports.expirations, &settings.expirations_output_path)
        .expect("write expirations");

    let counts: serde_json::Value =
        read_document(&settings.counts_output_path).expect("read counts");
    assert_eq!(counts, json!({ "Lab Safety": 3, "X-Ray Safety": 3 }));

    let roster_text =
        std::fs::read_to_string(&settings.fiscal_roster_output_path).expect("read roster");
    assert!(roster_text.starts_with("{\n  \"X-Ray Safety\": [\n    \"Jane Anderson\","));

    let expirations: serde_json::Value =
        read_document(&settings.expirations_output_path).expect("read expirations");
    assert_eq!(
        expirations,
        json!({
            "Jane Anderson": { "Lab Safety": "Expired" },
            "John Smith": { "Lab Safety": "Expiring Soon" }
        })
    );

    std::fs::remove_dir_all(&dir).ok();
}
