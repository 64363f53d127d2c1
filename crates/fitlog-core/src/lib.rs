//! # fitlog-core
//!
//! Core data structures for the fitlog training tracker.
//!
//! This crate provides the record types parsed out of a user's workbook and the
//! pure queries a presentation layer runs over them:
//! - [`MeasurementRecord`] and [`Metric`] - body measurements and their series
//! - [`Routine`] and [`RoutineEntry`] - the exercise routine and its day /
//!   muscle-group filters
//! - [`ProgressLogEntry`] and [`SetEntry`] - per-set progress history
//! - [`PersonalData`] and [`NutritionRecord`] - the remaining workbook sheets
//!
//! All queries are side-effect free; nothing in this crate touches the file
//! system. Loading and appending live in `fitlog-store`.
//!
//! ## Example
//!
//! ```rust
//! use fitlog_core::{Routine, RoutineEntry};
//!
//! let routine = Routine::new(vec![RoutineEntry::new(
//!     "Lunes",
//!     "Pecho",
//!     "Press banca",
//! )]);
//!
//! let lunes = routine.filter_day("Lunes");
//! assert_eq!(lunes.len(), 1);
//! ```

pub mod error;
pub mod measurement;
pub mod nutrition;
pub mod personal;
pub mod progress;
pub mod routine;

// Re-exports for convenience
pub use error::{Error, Result};
pub use measurement::{measurement_series, MeasurementRecord, Metric};
pub use nutrition::NutritionRecord;
pub use personal::PersonalData;
pub use progress::{weight_series, ProgressLogEntry, SetEntry};
pub use routine::{Routine, RoutineEntry};

/// Header of the date column, shared by every dated sheet ("Medidas",
/// "Nutricion") and by the progress-log marker rows.
pub const COL_FECHA: &str = "Fecha";
