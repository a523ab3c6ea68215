//! Session kinds and completed-session records.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Kind of Pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Work interval (25 minutes)
    #[serde(rename = "Pomodoro")]
    Pomodoro,
    /// Short break (5 minutes)
    #[serde(rename = "Short break")]
    ShortBreak,
    /// Long break (15 minutes)
    #[serde(rename = "Long break")]
    LongBreak,
}

/// Per-kind data: default length in seconds, timeline glyph, display name.
struct KindInfo {
    seconds: i64,
    glyph: char,
    name: &'static str,
}

const POMODORO: KindInfo = KindInfo {
    seconds: 25 * 60,
    glyph: 'O',
    name: "Pomodoro",
};

const SHORT_BREAK: KindInfo = KindInfo {
    seconds: 5 * 60,
    glyph: '.',
    name: "Short break",
};

const LONG_BREAK: KindInfo = KindInfo {
    seconds: 15 * 60,
    glyph: 'X',
    name: "Long break",
};

impl SessionKind {
    /// All session kinds, in display order.
    pub const ALL: [Self; 3] = [Self::Pomodoro, Self::ShortBreak, Self::LongBreak];

    const fn info(self) -> &'static KindInfo {
        match self {
            Self::Pomodoro => &POMODORO,
            Self::ShortBreak => &SHORT_BREAK,
            Self::LongBreak => &LONG_BREAK,
        }
    }

    /// Default session length in seconds.
    #[must_use]
    pub const fn default_seconds(self) -> i64 {
        self.info().seconds
    }

    /// Default session length as a duration.
    #[must_use]
    pub const fn default_duration(self) -> Duration {
        Duration::seconds(self.default_seconds())
    }

    /// Glyph used for this kind on the timeline.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.info().glyph
    }

    /// Human-readable name, also the `type` stored in the journal.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.info().name
    }

    /// Check if this is a break.
    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A completed session as stored in the journal.
///
/// Times are local wall-clock times of day with whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "type")]
    pub kind: SessionKind,
    #[serde(with = "hms")]
    pub start: NaiveTime,
    #[serde(with = "hms")]
    pub end: NaiveTime,
}

impl SessionRecord {
    /// Create a record, dropping sub-second precision from both times.
    #[must_use]
    pub fn new(kind: SessionKind, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            kind,
            start: truncate_to_seconds(start),
            end: truncate_to_seconds(end),
        }
    }

    /// Wall-clock length of the session.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }
}

fn truncate_to_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// `HH:MM:SS` encoding for journal times.
mod hms {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_default_durations() {
        assert_eq!(SessionKind::Pomodoro.default_seconds(), 1500);
        assert_eq!(SessionKind::ShortBreak.default_seconds(), 300);
        assert_eq!(SessionKind::LongBreak.default_seconds(), 900);
        assert_eq!(SessionKind::Pomodoro.default_duration().num_minutes(), 25);
    }

    #[test]
    fn test_glyphs_and_names() {
        let glyphs: String = SessionKind::ALL.iter().map(|k| k.glyph()).collect();
        assert_eq!(glyphs, "O.X");
        assert_eq!(SessionKind::ShortBreak.to_string(), "Short break");
        assert_eq!(SessionKind::LongBreak.display_name(), "Long break");
    }

    #[test]
    fn test_is_break() {
        assert!(!SessionKind::Pomodoro.is_break());
        assert!(SessionKind::ShortBreak.is_break());
        assert!(SessionKind::LongBreak.is_break());
    }

    #[test]
    fn test_record_serializes_to_journal_shape() {
        let record = SessionRecord::new(SessionKind::ShortBreak, hms(9, 25, 0), hms(9, 30, 0));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"type":"Short break","start":"09:25:00","end":"09:30:00"}"#
        );
    }

    #[test]
    fn test_record_parses_journal_entry() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"type": "Long break", "start": "14:00:05", "end": "14:15:05"}"#)
                .unwrap();
        assert_eq!(record.kind, SessionKind::LongBreak);
        assert_eq!(record.start, hms(14, 0, 5));
        assert_eq!(record.duration().num_minutes(), 15);
    }

    #[test]
    fn test_record_rejects_unknown_type() {
        let result: Result<SessionRecord, _> =
            serde_json::from_str(r#"{"type": "Nap", "start": "14:00:05", "end": "14:15:05"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_rejects_bad_time() {
        let result: Result<SessionRecord, _> =
            serde_json::from_str(r#"{"type": "Pomodoro", "start": "9am", "end": "14:15:05"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_truncates_subseconds() {
        let start = NaiveTime::from_hms_milli_opt(9, 0, 0, 750).unwrap();
        let record = SessionRecord::new(SessionKind::Pomodoro, start, hms(9, 25, 0));
        assert_eq!(record.start, hms(9, 0, 0));
    }
}
