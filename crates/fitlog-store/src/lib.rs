//! # fitlog-store
//!
//! File IO for the fitlog training tracker.
//!
//! Two collaborating pieces:
//! - [`UserWorkbook`] - loads the four named sheets of a per-user workbook
//!   ("Datos", "Nutricion", "Medidas", "Rutina") into `fitlog-core` records.
//!   Each sheet loads independently; one failing sheet never takes down the
//!   others.
//! - [`ProgressLog`] - the append-only per-(user, exercise) set log. Appends
//!   add a date-scoped block of rows; reads reconstruct the history from the
//!   tagged-row layout with a tolerant row-by-row parse.
//!
//! Paths under the data directory are resolved by [`DataDir`]; nothing here
//! carries ambient state - every operation takes the user and exercise
//! identifiers explicitly.

mod convert;
mod error;
mod paths;
mod progress;
mod reader;

pub use error::{StoreError, StoreResult};
pub use paths::{DataDir, WORKBOOK_EXT};
pub use progress::{ProgressLog, LOG_HEADERS, LOG_SHEET};
pub use reader::{
    UserWorkbook, SHEET_DATOS, SHEET_MEDIDAS, SHEET_NUTRICION, SHEET_RUTINA,
};
