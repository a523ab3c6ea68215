//! One-line timeline of a day's sessions.

use chrono::NaiveDate;
use serde::Serialize;

use super::session::{SessionKind, SessionRecord};

/// Shown instead of a timeline when a day has no sessions.
pub const EMPTY_TIMELINE: &str = "session is empty";

/// Render records as glyphs in journal order, e.g. `O.OX`.
///
/// An empty day renders as [`EMPTY_TIMELINE`].
#[must_use]
pub fn render(records: &[SessionRecord]) -> String {
    if records.is_empty() {
        return EMPTY_TIMELINE.to_string();
    }
    records.iter().map(|r| r.kind.glyph()).collect()
}

/// A day's timeline with per-kind counts, for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineSummary {
    pub date: NaiveDate,
    pub timeline: String,
    pub pomodoros: usize,
    pub short_breaks: usize,
    pub long_breaks: usize,
    /// Wall-clock minutes spent in completed Pomodoros
    pub focus_minutes: i64,
    pub sessions: Vec<SessionRecord>,
}

impl TimelineSummary {
    #[must_use]
    pub fn new(date: NaiveDate, sessions: Vec<SessionRecord>) -> Self {
        let count = |kind: SessionKind| sessions.iter().filter(|r| r.kind == kind).count();
        let focus_minutes = sessions
            .iter()
            .filter(|r| r.kind == SessionKind::Pomodoro)
            .map(|r| r.duration().num_minutes())
            .sum();

        Self {
            date,
            timeline: render(&sessions),
            pomodoros: count(SessionKind::Pomodoro),
            short_breaks: count(SessionKind::ShortBreak),
            long_breaks: count(SessionKind::LongBreak),
            focus_minutes,
            sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn records(kinds: &[SessionKind]) -> Vec<SessionRecord> {
        let mut start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        kinds
            .iter()
            .map(|&kind| {
                let end = start + kind.default_duration();
                let record = SessionRecord::new(kind, start, end);
                start = end;
                record
            })
            .collect()
    }

    #[test]
    fn test_render_empty_is_sentinel() {
        let rendered = render(&[]);
        assert_eq!(rendered, EMPTY_TIMELINE);
        assert!(!rendered.is_empty());
    }

    #[test]
    fn test_render_glyphs_in_order() {
        let day = records(&[
            SessionKind::Pomodoro,
            SessionKind::ShortBreak,
            SessionKind::Pomodoro,
            SessionKind::LongBreak,
        ]);
        assert_eq!(render(&day), "O.OX");
    }

    #[test]
    fn test_render_single() {
        assert_eq!(render(&records(&[SessionKind::Pomodoro])), "O");
    }

    #[test]
    fn test_summary_counts() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let summary = TimelineSummary::new(
            date,
            records(&[
                SessionKind::Pomodoro,
                SessionKind::ShortBreak,
                SessionKind::Pomodoro,
                SessionKind::LongBreak,
            ]),
        );

        assert_eq!(summary.timeline, "O.OX");
        assert_eq!(summary.pomodoros, 2);
        assert_eq!(summary.short_breaks, 1);
        assert_eq!(summary.long_breaks, 1);
        assert_eq!(summary.focus_minutes, 50);
    }

    #[test]
    fn test_summary_serializes_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let json = serde_json::to_value(TimelineSummary::new(date, Vec::new())).unwrap();
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["timeline"], EMPTY_TIMELINE);
        assert_eq!(json["sessions"], serde_json::json!([]));
    }
}
