//! Lenient cell coercion helpers
//!
//! The workbooks are hand-maintained, so cells routinely hold the "wrong"
//! type: dates typed as text, numbers stored as strings, stray whitespace.
//! Every helper here returns `Option` - a cell that cannot be coerced is
//! simply absent, and the caller decides whether that drops the row.

use std::collections::HashMap;

use calamine::{Data, DataType};
use chrono::NaiveDate;

/// String date formats accepted by [`cell_date`], tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Coerce a cell to trimmed, non-empty text
pub(crate) fn cell_str(cell: &Data) -> Option<String> {
    let text = cell.as_string()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Coerce a cell to a float: native numbers, or numeric text
pub(crate) fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a cell to a non-negative integer. Spreadsheets store integers as
/// floats, so `10.0` is accepted; `10.5` is not.
pub(crate) fn cell_u32(cell: &Data) -> Option<u32> {
    let value = cell_f64(cell)?;
    if value >= 0.0 && value <= u32::MAX as f64 && value.fract() == 0.0 {
        Some(value as u32)
    } else {
        None
    }
}

/// Coerce a cell to a date: native spreadsheet dates, or text in one of
/// [`DATE_FORMATS`].
pub(crate) fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(_) | Data::DateTimeIso(_) => cell.as_date(),
        Data::String(s) => {
            let s = s.trim();
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        }
        _ => None,
    }
}

/// Whether a cell holds nothing (empty, or whitespace-only text)
pub(crate) fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Whether every cell of a row is blank
pub(crate) fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(is_blank)
}

/// Map header text to column position, from a sheet's first row
pub(crate) fn header_map(row: &[Data]) -> HashMap<String, usize> {
    row.iter()
        .enumerate()
        .filter_map(|(col, cell)| cell_str(cell).map(|name| (name, col)))
        .collect()
}
