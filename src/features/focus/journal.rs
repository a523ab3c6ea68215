//! Per-day session journal.
//!
//! Each calendar day is one file named `YYYY-MM-DD` in the data directory,
//! holding a JSON array of that day's completed sessions in the order they
//! finished. Appending reads the whole day, adds the record and rewrites the
//! file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::session::SessionRecord;
use crate::config::Paths;
use crate::error::PomoError;

/// File name format for journal days.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Append-only store of completed sessions, one file per day.
#[derive(Debug, Clone)]
pub struct JournalStore {
    dir: PathBuf,
}

impl JournalStore {
    /// Create a store over the data root.
    ///
    /// The directory is expected to exist already; see [`Paths::ensure_dirs`].
    #[must_use]
    pub fn new(paths: &Paths) -> Self {
        Self::with_dir(paths.root.clone())
    }

    /// Create a store over a custom directory (for testing).
    #[must_use]
    pub const fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the journal file for `date`.
    #[must_use]
    pub fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(date.format(DAY_FORMAT).to_string())
    }

    /// Load every record for `date`, in completion order.
    ///
    /// A day with no journal file has no sessions yet and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::CorruptJournal` if the file exists but is not a
    /// valid list of records, or `PomoError::Persistence` if it cannot be read.
    pub fn load_day(&self, date: NaiveDate) -> Result<Vec<SessionRecord>, PomoError> {
        let path = self.day_path(date);

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no journal for day");
                return Ok(Vec::new());
            }
            Err(e) => return Err(PomoError::persistence(path, e)),
        };

        // Undecodable text is corrupt content, not a read failure.
        serde_json::from_slice(&bytes).map_err(|source| {
            warn!(path = %path.display(), error = %source, "journal is corrupt");
            PomoError::CorruptJournal { path, source }
        })
    }

    /// Append `record` to the journal for `date`.
    ///
    /// The day is rewritten through a temporary sibling file that replaces the
    /// journal in one rename. A corrupt day is reported and left untouched.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::CorruptJournal` if the existing day cannot be
    /// parsed, or `PomoError::Persistence` if the day cannot be written.
    pub fn append(&self, date: NaiveDate, record: &SessionRecord) -> Result<(), PomoError> {
        let mut records = self.load_day(date)?;
        records.push(*record);
        self.write_day(date, &records)?;

        debug!(%date, count = records.len(), "appended session to journal");
        Ok(())
    }

    fn write_day(&self, date: NaiveDate, records: &[SessionRecord]) -> Result<(), PomoError> {
        let path = self.day_path(date);
        let staging = path.with_extension("tmp");
        let content = serde_json::to_string(records)?;

        std::fs::write(&staging, content).map_err(|e| PomoError::persistence(&staging, e))?;

        std::fs::rename(&staging, &path).map_err(|e| {
            // Best effort; the rename error is what gets reported.
            let _ = std::fs::remove_file(&staging);
            PomoError::persistence(&path, e)
        })
    }
}
