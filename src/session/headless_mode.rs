//! Headless mode execution
//!
//! Prints the dataset overview to stdout and exits, for use in scripts and
//! terminals where the TUI cannot run.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::consts::cli_consts::SAMPLE_ROW_COUNT;
use crate::dataset::{Column, Outcome};
use crate::logging::{LogLevel, should_log_with_env};
use crate::stats::{describe, outcome_counts};
use crate::ui::explorer::utils::format_number;
use std::error::Error;

/// Runs the application in headless mode: one overview dump, no event loop.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let table = &session.table;

    // Print session start message
    print_session_starting("headless", table.source());
    let counts = outcome_counts(table);

    println!("\nSummary statistics ({} records):", table.len());
    println!(
        "{:<26} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for summary in describe(table) {
        println!(
            "{:<26} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            summary.column.header_name(),
            summary.count,
            format_number(summary.mean),
            format_number(summary.std),
            format_number(summary.min),
            format_number(summary.q1),
            format_number(summary.median),
            format_number(summary.q3),
            format_number(summary.max),
        );
    }

    println!(
        "\nOutcomes: {} survived, {} died",
        counts.get(Outcome::Survived),
        counts.get(Outcome::Died)
    );

    println!("\nSample data (first {} rows):", SAMPLE_ROW_COUNT);
    let labels: Vec<&str> = Column::ALL.iter().map(|c| c.short_label()).collect();
    println!("{}", format_row(&labels));
    for record in table.head(SAMPLE_ROW_COUNT) {
        let cells: Vec<String> = Column::ALL
            .iter()
            .map(|&c| format_number(record.value(c)))
            .collect();
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        println!("{}", format_row(&cells));
    }

    // Row-filtering detail is only interesting when debugging a load.
    if should_log_with_env(LogLevel::Debug) {
        println!(
            "\n{} incomplete rows were dropped during the load.",
            table.dropped_rows()
        );
    }

    print_session_exit_success();

    Ok(())
}

fn format_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|c| format!("{:>10}", c))
        .collect::<Vec<_>>()
        .join(" ")
}
