//! Terminal output for sessions.

use chrono::{NaiveDate, NaiveTime};
use colored::Colorize;

use crate::features::focus::{render_progress_bar, Countdown, Remaining, SessionKind};

const BAR_WIDTH: usize = 20;

/// `Today is: 2024-03-01`
#[must_use]
pub fn format_today(date: NaiveDate) -> String {
    format!("Today is: {}", date.format("%Y-%m-%d"))
}

/// `Pomodoro started at 09:00:00`
#[must_use]
pub fn format_started(kind: SessionKind, at: NaiveTime) -> String {
    format!("{} started at {}", kind_label(kind), at.format("%H:%M:%S"))
}

/// `Pomodoro finished at 09:25:00`
#[must_use]
pub fn format_finished(kind: SessionKind, at: NaiveTime) -> String {
    format!("{} finished at {}", kind_label(kind), at.format("%H:%M:%S"))
}

/// Countdown line, redrawn in place on every tick.
#[must_use]
pub fn format_countdown(countdown: &Countdown) -> String {
    format_countdown_parts(countdown.remaining(), countdown.progress())
}

/// Countdown line for a session that has not ticked yet.
#[must_use]
pub fn format_countdown_start(total_seconds: i64) -> String {
    format_countdown_parts(Remaining::from_seconds(total_seconds), 0.0)
}

fn format_countdown_parts(remaining: Remaining, progress: f64) -> String {
    format!(
        "   {remaining} {}",
        render_progress_bar(progress, BAR_WIDTH).dimmed()
    )
}

fn kind_label(kind: SessionKind) -> colored::ColoredString {
    if kind.is_break() {
        kind.display_name().cyan().bold()
    } else {
        kind.display_name().red().bold()
    }
}
