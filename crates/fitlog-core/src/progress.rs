//! Per-set progress records
//!
//! A progress log holds one [`ProgressLogEntry`] per completed set. On disk
//! the sets of one session share a date announced by a marker row; the store
//! resolves that inheritance, so entries here always carry their full date.

use chrono::NaiveDate;

/// One set as submitted by the user when saving progress
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetEntry {
    /// Repetitions performed
    pub reps: u32,
    /// Weight lifted in kg
    pub weight_kg: f64,
    /// Rest taken after the set, in seconds
    pub rest_sec: f64,
}

impl SetEntry {
    pub fn new(reps: u32, weight_kg: f64, rest_sec: f64) -> Self {
        Self {
            reps,
            weight_kg,
            rest_sec,
        }
    }
}

/// One set as reconstructed from the log file
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressLogEntry {
    /// Session date, inherited from the nearest preceding marker row
    pub date: NaiveDate,
    /// Set number within the session, 1-based
    pub set_number: u32,
    /// Repetitions performed
    pub reps: u32,
    /// Weight lifted in kg
    pub weight_kg: f64,
    /// Rest taken after the set, in seconds
    pub rest_sec: f64,
}

impl ProgressLogEntry {
    /// Build an entry from a session date, its position, and the set data
    pub fn from_set(date: NaiveDate, set_number: u32, set: SetEntry) -> Self {
        Self {
            date,
            set_number,
            reps: set.reps,
            weight_kg: set.weight_kg,
            rest_sec: set.rest_sec,
        }
    }
}

/// Build the (date, weight) series for plotting an exercise's evolution.
///
/// One point per logged set, in log order (chronological by construction,
/// since the log only ever grows by appends).
pub fn weight_series(entries: &[ProgressLogEntry]) -> Vec<(NaiveDate, f64)> {
    entries.iter().map(|e| (e.date, e.weight_kg)).collect()
}
