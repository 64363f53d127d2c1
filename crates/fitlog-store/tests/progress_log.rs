//! End-to-end tests for the progress log store: append and read back
//! against real workbook files in a scratch directory.

use chrono::NaiveDate;
use fitlog_core::SetEntry;
use fitlog_store::{DataDir, ProgressLog, LOG_HEADERS, LOG_SHEET};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn missing_log_reads_as_empty_history() {
    let tmp = TempDir::new().unwrap();
    let dir = DataDir::new(tmp.path());

    let history = ProgressLog::read_history(&dir, "ana01", "Press banca").unwrap();
    assert!(history.is_empty());
}

#[test]
fn first_append_creates_the_log() {
    let tmp = TempDir::new().unwrap();
    let dir = DataDir::new(tmp.path());
    let sets = [SetEntry::new(10, 50.0, 60.0), SetEntry::new(8, 52.5, 60.0)];

    ProgressLog::append(&dir, "ana01", "Press banca", date("2024-01-10"), &sets).unwrap();

    assert!(dir.progress_log("ana01", "Press banca").exists());
    let history = ProgressLog::read_history(&dir, "ana01", "Press banca").unwrap();
    assert_eq!(history.len(), 2);

    assert_eq!(history[0].date, date("2024-01-10"));
    assert_eq!(history[0].set_number, 1);
    assert_eq!(history[0].reps, 10);
    assert_eq!(history[0].weight_kg, 50.0);
    assert_eq!(history[0].rest_sec, 60.0);

    assert_eq!(history[1].date, date("2024-01-10"));
    assert_eq!(history[1].set_number, 2);
    assert_eq!(history[1].reps, 8);
    assert_eq!(history[1].weight_kg, 52.5);
}

#[test]
fn sequential_appends_never_lose_prior_entries() {
    let tmp = TempDir::new().unwrap();
    let dir = DataDir::new(tmp.path());

    ProgressLog::append(
        &dir,
        "ana01",
        "Sentadillas",
        date("2024-01-10"),
        &[SetEntry::new(10, 60.0, 90.0), SetEntry::new(10, 62.5, 90.0)],
    )
    .unwrap();
    ProgressLog::append(
        &dir,
        "ana01",
        "Sentadillas",
        date("2024-01-17"),
        &[SetEntry::new(8, 65.0, 120.0)],
    )
    .unwrap();

    let history = ProgressLog::read_history(&dir, "ana01", "Sentadillas").unwrap();
    assert_eq!(history.len(), 3);

    // The first session survives the second append byte-for-value.
    assert_eq!(history[0].date, date("2024-01-10"));
    assert_eq!(history[0].weight_kg, 60.0);
    assert_eq!(history[1].date, date("2024-01-10"));
    assert_eq!(history[1].weight_kg, 62.5);

    // The new block follows, with its own date and numbering restarted.
    assert_eq!(history[2].date, date("2024-01-17"));
    assert_eq!(history[2].set_number, 1);
    assert_eq!(history[2].rest_sec, 120.0);
}

#[test]
fn logs_are_isolated_per_exercise_and_user() {
    let tmp = TempDir::new().unwrap();
    let dir = DataDir::new(tmp.path());

    ProgressLog::append(
        &dir,
        "ana01",
        "Press banca",
        date("2024-01-10"),
        &[SetEntry::new(10, 50.0, 60.0)],
    )
    .unwrap();

    assert!(ProgressLog::read_history(&dir, "ana01", "Sentadillas")
        .unwrap()
        .is_empty());
    assert!(ProgressLog::read_history(&dir, "luis02", "Press banca")
        .unwrap()
        .is_empty());
}

#[test]
fn append_preserves_a_preexisting_handwritten_log() {
    let tmp = TempDir::new().unwrap();
    let dir = DataDir::new(tmp.path());
    let path = dir.progress_log("ana01", "Remo");

    // A log written by hand (or by an older tool), dates as plain text.
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(LOG_SHEET).unwrap();
    sheet.write_string(0, 0, "Fecha").unwrap();
    sheet.write_string(0, 1, "2023-12-20").unwrap();
    for (col, header) in LOG_HEADERS.iter().enumerate() {
        sheet.write_string(1, col as u16, *header).unwrap();
    }
    sheet.write_number(2, 0, 1.0).unwrap();
    sheet.write_number(2, 1, 12.0).unwrap();
    sheet.write_number(2, 2, 35.0).unwrap();
    sheet.write_number(2, 3, 45.0).unwrap();
    workbook.save(&path).unwrap();

    ProgressLog::append(
        &dir,
        "ana01",
        "Remo",
        date("2024-01-10"),
        &[SetEntry::new(10, 40.0, 60.0)],
    )
    .unwrap();

    let history = ProgressLog::read_history(&dir, "ana01", "Remo").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, date("2023-12-20"));
    assert_eq!(history[0].weight_kg, 35.0);
    assert_eq!(history[1].date, date("2024-01-10"));
    assert_eq!(history[1].weight_kg, 40.0);
}

#[test]
fn malformed_rows_are_dropped_without_failing_the_read() {
    let tmp = TempDir::new().unwrap();
    let dir = DataDir::new(tmp.path());
    let path = dir.progress_log("ana01", "Fondos");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(LOG_SHEET).unwrap();
    sheet.write_string(0, 0, "Fecha").unwrap();
    sheet.write_string(0, 1, "2024-01-10").unwrap();
    for (col, header) in LOG_HEADERS.iter().enumerate() {
        sheet.write_string(1, col as u16, *header).unwrap();
    }
    // Good row.
    sheet.write_number(2, 0, 1.0).unwrap();
    sheet.write_number(2, 1, 10.0).unwrap();
    sheet.write_number(2, 2, 20.0).unwrap();
    sheet.write_number(2, 3, 60.0).unwrap();
    // Non-numeric weight: dropped alone.
    sheet.write_number(3, 0, 2.0).unwrap();
    sheet.write_number(3, 1, 10.0).unwrap();
    sheet.write_string(3, 2, "mucho").unwrap();
    sheet.write_number(3, 3, 60.0).unwrap();
    // Good row after the bad one.
    sheet.write_number(4, 0, 3.0).unwrap();
    sheet.write_number(4, 1, 8.0).unwrap();
    sheet.write_number(4, 2, 22.5).unwrap();
    sheet.write_number(4, 3, 60.0).unwrap();
    workbook.save(&path).unwrap();

    let history = ProgressLog::read_history(&dir, "ana01", "Fondos").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].set_number, 1);
    assert_eq!(history[1].set_number, 3);
    assert_eq!(history[1].weight_kg, 22.5);
}

#[test]
fn set_rows_before_any_marker_are_discarded() {
    let tmp = TempDir::new().unwrap();
    let dir = DataDir::new(tmp.path());
    let path = dir.progress_log("ana01", "Curl");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(LOG_SHEET).unwrap();
    // An orphan set row with no date to inherit.
    sheet.write_number(0, 0, 1.0).unwrap();
    sheet.write_number(0, 1, 15.0).unwrap();
    sheet.write_number(0, 2, 10.0).unwrap();
    sheet.write_number(0, 3, 30.0).unwrap();
    sheet.write_string(1, 0, "Fecha").unwrap();
    sheet.write_string(1, 1, "2024-01-10").unwrap();
    sheet.write_number(2, 0, 1.0).unwrap();
    sheet.write_number(2, 1, 12.0).unwrap();
    sheet.write_number(2, 2, 12.5).unwrap();
    sheet.write_number(2, 3, 30.0).unwrap();
    workbook.save(&path).unwrap();

    let history = ProgressLog::read_history(&dir, "ana01", "Curl").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, date("2024-01-10"));
    assert_eq!(history[0].reps, 12);
}

#[test]
fn appending_zero_sets_still_records_the_session_marker() {
    let tmp = TempDir::new().unwrap();
    let dir = DataDir::new(tmp.path());

    ProgressLog::append(&dir, "ana01", "Plancha", date("2024-01-10"), &[]).unwrap();
    let history = ProgressLog::read_history(&dir, "ana01", "Plancha").unwrap();
    assert!(history.is_empty());

    // The file exists and a later real session appends cleanly after it.
    ProgressLog::append(
        &dir,
        "ana01",
        "Plancha",
        date("2024-01-17"),
        &[SetEntry::new(1, 0.0, 60.0)],
    )
    .unwrap();
    let history = ProgressLog::read_history(&dir, "ana01", "Plancha").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, date("2024-01-17"));
}
