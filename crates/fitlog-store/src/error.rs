//! Error types for fitlog-store

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`StoreError`]
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while reading or writing workbooks
#[derive(Debug, Error)]
pub enum StoreError {
    /// No workbook exists for the given user identifier
    #[error("No workbook found for user '{user_id}' at {}", path.display())]
    NotFound { user_id: String, path: PathBuf },

    /// The workbook container itself could not be opened
    #[error("Failed to open workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// One sheet failed to load; other sheets are unaffected
    #[error("Failed to load sheet '{name}': {source}")]
    Sheet {
        name: String,
        #[source]
        source: calamine::XlsxError,
    },

    /// A progress-log append could not be written
    #[error("Failed to write progress log: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this error means "this one sheet is unusable" rather than
    /// "the whole workbook is unusable".
    pub fn is_sheet_scoped(&self) -> bool {
        matches!(self, StoreError::Sheet { .. })
    }
}
