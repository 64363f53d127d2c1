//! The append-only progress log
//!
//! One workbook per (user, exercise), single sheet "Progreso", tagged-row
//! layout. Each saved session is one block:
//!
//! ```text
//! Fecha   2024-01-10
//! Serie   Repeticiones   Peso (kg)   Descanso (minutos)
//! 1       10             50          60
//! 2       8              52.5        60
//! ```
//!
//! Blocks are separated by a blank row. The marker row's date applies to
//! every set row until the next marker; header rows are skippable metadata.
//!
//! The xlsx container cannot be byte-appended, so an append re-emits every
//! existing row unchanged, adds the new block, writes the result to a temp
//! file in the same directory and renames it over the target. A failed
//! write therefore never corrupts the prior log.
//!
//! Reads are tolerant: a malformed set row, or a set row arriving before
//! any marker, is logged and dropped - never an error.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, DataType, Reader, Xlsx};
use chrono::NaiveDate;
use fitlog_core::{ProgressLogEntry, SetEntry, COL_FECHA};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::convert;
use crate::error::{StoreError, StoreResult};
use crate::paths::DataDir;

/// Name of the single sheet of every progress log
pub const LOG_SHEET: &str = "Progreso";

/// The header row written above each session's set rows
pub const LOG_HEADERS: [&str; 4] = ["Serie", "Repeticiones", "Peso (kg)", "Descanso (minutos)"];

/// Date format used in marker rows written by this store
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The per-(user, exercise) progress log store
pub struct ProgressLog;

impl ProgressLog {
    /// Append one session's sets to the log.
    ///
    /// Creates the log if it does not exist. Set numbers are assigned
    /// 1..N in input order. Existing rows are never rewritten or
    /// reordered.
    pub fn append(
        dir: &DataDir,
        user_id: &str,
        exercise: &str,
        date: NaiveDate,
        sets: &[SetEntry],
    ) -> StoreResult<()> {
        let path = dir.progress_log(user_id, exercise);
        let existing = if path.exists() {
            read_rows(&path)?
        } else {
            Vec::new()
        };

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(LOG_SHEET)?;

        let mut row = 0u32;
        for cells in &existing {
            copy_row(sheet, row, cells)?;
            row += 1;
        }
        if !existing.is_empty() {
            // Blank separator row between sessions.
            row += 1;
        }

        sheet.write_string(row, 0, COL_FECHA)?;
        sheet.write_string(row, 1, date.format(DATE_FORMAT).to_string())?;
        row += 1;
        for (col, header) in LOG_HEADERS.iter().enumerate() {
            sheet.write_string(row, col as u16, *header)?;
        }
        row += 1;
        for (i, set) in sets.iter().enumerate() {
            sheet.write_number(row, 0, (i + 1) as f64)?;
            sheet.write_number(row, 1, f64::from(set.reps))?;
            sheet.write_number(row, 2, set.weight_kg)?;
            sheet.write_number(row, 3, set.rest_sec)?;
            row += 1;
        }

        // Write to a sibling temp file, then rename over the target, so a
        // failed save leaves the prior log intact.
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;
        let tmp = tempfile::NamedTempFile::new_in(parent)?;
        workbook.save(tmp.path())?;
        tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;

        log::debug!(
            "appended {} set(s) for {user_id}/{exercise} on {date}",
            sets.len()
        );
        Ok(())
    }

    /// Read the full history for a (user, exercise) pair.
    ///
    /// A missing log is an empty history, not an error. Entries come back
    /// in file order, which is chronological by construction since the log
    /// only grows by appends.
    pub fn read_history(
        dir: &DataDir,
        user_id: &str,
        exercise: &str,
    ) -> StoreResult<Vec<ProgressLogEntry>> {
        let path = dir.progress_log(user_id, exercise);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let rows = read_rows(&path)?;
        Ok(parse_rows(rows.iter().map(Vec::as_slice)))
    }
}

/// Read every row of the first sheet of a log workbook.
///
/// The format assumes exactly one relevant sheet; whatever sheet comes
/// first is it. A workbook with no sheets at all reads as empty.
fn read_rows(path: &Path) -> StoreResult<Vec<Vec<Data>>> {
    let bytes = fs::read(path)?;
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let Some(name) = workbook.sheet_names().first().cloned() else {
        return Ok(Vec::new());
    };
    let range = workbook
        .worksheet_range(&name)
        .map_err(|source| StoreError::Sheet { name, source })?;
    Ok(range.rows().map(<[Data]>::to_vec).collect())
}

/// Re-emit one existing row into the workbook being written
fn copy_row(
    sheet: &mut Worksheet,
    row: u32,
    cells: &[Data],
) -> Result<(), rust_xlsxwriter::XlsxError> {
    for (col, cell) in cells.iter().enumerate() {
        let col = col as u16;
        match cell {
            Data::Empty | Data::Error(_) => {}
            Data::String(s) => {
                sheet.write_string(row, col, s.as_str())?;
            }
            Data::Float(f) => {
                sheet.write_number(row, col, *f)?;
            }
            Data::Int(i) => {
                sheet.write_number(row, col, *i as f64)?;
            }
            Data::Bool(b) => {
                sheet.write_boolean(row, col, *b)?;
            }
            Data::DateTime(_) | Data::DateTimeIso(_) => {
                // Dates are normalized to the text form markers use.
                if let Some(date) = cell.as_date() {
                    sheet.write_string(row, col, date.format(DATE_FORMAT).to_string())?;
                } else if let Some(text) = cell.as_string() {
                    sheet.write_string(row, col, text)?;
                }
            }
            Data::DurationIso(s) => {
                sheet.write_string(row, col, s.as_str())?;
            }
        }
    }
    Ok(())
}

/// Reconstruct entries from the tagged-row layout.
///
/// State machine over file order: marker rows set the current date, header
/// and blank rows are skipped, four-cell data rows are coerced under the
/// current date. Rows that fail coercion, and set rows arriving before any
/// marker, are dropped.
fn parse_rows<'a>(rows: impl Iterator<Item = &'a [Data]>) -> Vec<ProgressLogEntry> {
    let mut entries = Vec::new();
    let mut current_date: Option<NaiveDate> = None;

    for row in rows {
        if convert::is_blank_row(row) {
            continue;
        }
        if is_marker_row(row) {
            current_date = row.get(1).and_then(convert::cell_date);
            if current_date.is_none() {
                log::warn!("marker row with unparsable date: {row:?}");
            }
            continue;
        }
        if is_header_row(row) {
            continue;
        }

        let Some(date) = current_date else {
            log::warn!("set row before any date marker, dropping: {row:?}");
            continue;
        };
        match parse_set_row(row) {
            Some((set_number, reps, weight_kg, rest_sec)) => entries.push(ProgressLogEntry {
                date,
                set_number,
                reps,
                weight_kg,
                rest_sec,
            }),
            None => log::warn!("malformed set row, dropping: {row:?}"),
        }
    }
    entries
}

/// Two-cell marker shape: first cell is the date tag
fn is_marker_row(row: &[Data]) -> bool {
    row.first()
        .and_then(convert::cell_str)
        .is_some_and(|tag| tag == COL_FECHA)
}

/// Four fixed header strings, in order
fn is_header_row(row: &[Data]) -> bool {
    row.len() >= LOG_HEADERS.len()
        && LOG_HEADERS
            .iter()
            .enumerate()
            .all(|(col, header)| convert::cell_str(&row[col]).as_deref() == Some(*header))
}

/// Coerce the four-cell data shape (serie, reps, peso, descanso)
fn parse_set_row(row: &[Data]) -> Option<(u32, u32, f64, f64)> {
    if row.len() < 4 {
        return None;
    }
    let set_number = convert::cell_u32(&row[0])?;
    let reps = convert::cell_u32(&row[1])?;
    let weight_kg = convert::cell_f64(&row[2])?;
    let rest_sec = convert::cell_f64(&row[3])?;
    Some((set_number, reps, weight_kg, rest_sec))
}
