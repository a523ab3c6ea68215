//! Timeline command (`t`).

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PomoError;
use crate::features::focus::journal::DAY_FORMAT;
use crate::features::focus::{render, Clock, JournalStore, SystemClock, TimelineSummary};
use crate::output::to_json;

/// Show the timeline for `date` (`YYYY-MM-DD`), or for today.
///
/// # Errors
///
/// Returns an error if `date` is malformed or the day's journal is corrupt.
pub fn timeline(paths: &Paths, date: Option<&str>, format: OutputFormat) -> Result<String, PomoError> {
    let date = match date {
        Some(raw) => parse_day(raw)?,
        None => SystemClock.now().date(),
    };

    show_timeline(&JournalStore::new(paths), date, format)
}

/// Render one day from `store`.
///
/// # Errors
///
/// Returns an error if the day's journal cannot be read or parsed.
pub fn show_timeline(
    store: &JournalStore,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let records = store.load_day(date)?;

    match format {
        OutputFormat::Pretty => Ok(render(&records)),
        OutputFormat::Json => to_json(&TimelineSummary::new(date, records)),
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate, PomoError> {
    NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT)
        .map_err(|e| PomoError::Parse(format!("Invalid date '{raw}' (expected YYYY-MM-DD): {e}")))
}
