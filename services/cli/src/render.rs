use chrono::NaiveDate;
use training_report::workflows::training::{FiscalYear, TrainingReports};

pub(crate) fn render_summary(reports: &TrainingReports) {
    let summary = reports.summary();

    println!("Training completion reports");
    println!(
        "Roster: {} trainees, {} trainings on record",
        summary.trainee_count, summary.training_count
    );

    println!("\nCompletions by training");
    for (training, count) in reports.completion_counts.iter() {
        println!("- {training}: {count}");
    }

    match (summary.fiscal_year_start, summary.fiscal_year_end) {
        (Some(start), Some(end)) => {
            println!("\n{} completions ({start} -> {end})", summary.fiscal_year)
        }
        _ => println!("\n{} completions", summary.fiscal_year),
    }
    for entry in &summary.roster_sizes {
        println!("- {}: {} completed", entry.training, entry.completed);
    }

    if summary.trainees_flagged == 0 {
        println!("\nExpirations as of {}: none", summary.status_date);
    } else {
        println!(
            "\nExpirations as of {} ({} expired, {} expiring soon)",
            summary.status_date, summary.expired, summary.expiring_soon
        );
        for entry in reports.expirations.iter() {
            for (training, status) in entry.iter() {
                println!("- {} | {} | {}", entry.trainee, training, status.label());
            }
        }
    }
}

pub(crate) fn render_fiscal_year(date: NaiveDate, fiscal_year: FiscalYear) {
    match (fiscal_year.starts_on(), fiscal_year.ends_on()) {
        (Some(start), Some(end)) => println!("{date} falls in {fiscal_year} ({start} -> {end})"),
        _ => println!("{date} falls in {fiscal_year}"),
    }
}
