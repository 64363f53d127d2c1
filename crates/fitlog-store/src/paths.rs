//! Path resolution for per-user files
//!
//! All files live flat under one data directory:
//! - `<base>/<user_id>.xlsx` - the user's workbook
//! - `<base>/<user_id>_<exercise>.xlsx` - one progress log per exercise
//!
//! Resolution is deterministic: the same (user, exercise) pair always maps
//! to the same path.

use std::path::{Path, PathBuf};

/// File extension of every workbook this crate reads or writes
pub const WORKBOOK_EXT: &str = "xlsx";

/// The directory holding all per-user workbooks and progress logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    base: PathBuf,
}

impl DataDir {
    /// Wrap a base directory. The directory need not exist yet; appends
    /// create it on demand.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of a user's workbook
    pub fn user_workbook(&self, user_id: &str) -> PathBuf {
        self.base.join(format!("{user_id}.{WORKBOOK_EXT}"))
    }

    /// Path of a user's progress log for one exercise
    pub fn progress_log(&self, user_id: &str, exercise: &str) -> PathBuf {
        self.base.join(format!(
            "{user_id}_{}.{WORKBOOK_EXT}",
            sanitize_exercise(exercise)
        ))
    }
}

/// Make an exercise name filename-safe: alphanumeric characters are kept,
/// everything else becomes an underscore.
fn sanitize_exercise(exercise: &str) -> String {
    exercise
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
