//! JSON output.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::PomoError;
use crate::features::focus::SessionRecord;

/// A completed session together with the journal day it was filed under.
#[derive(Debug, Serialize)]
pub struct JournalEntry<'a> {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub record: &'a SessionRecord,
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
