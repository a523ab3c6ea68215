//! Countdown state for a running session.
//!
//! Provides the per-second countdown and `MM:SS` formatting.

use chrono::Duration;

use crate::error::PomoError;

/// Countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Seconds are still left
    Running,
    /// Reached zero
    Completed,
}

/// Time left on a countdown, split into whole minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split a non-negative number of seconds.
    #[must_use]
    pub const fn from_seconds(total: i64) -> Self {
        let minutes = total / 60;
        Self {
            minutes,
            seconds: total - minutes * 60,
        }
    }

    #[must_use]
    pub const fn total_seconds(&self) -> i64 {
        self.minutes * 60 + self.seconds
    }
}

impl std::fmt::Display for Remaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// A countdown that loses exactly one second per tick.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Total duration in seconds
    total_seconds: i64,
    /// Remaining seconds
    remaining_seconds: i64,
    state: CountdownState,
}

impl Countdown {
    /// Create a running countdown.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidDuration` if `seconds` is zero or negative.
    pub fn new(seconds: i64) -> Result<Self, PomoError> {
        if seconds <= 0 {
            return Err(PomoError::InvalidDuration(seconds));
        }
        Ok(Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
            state: CountdownState::Running,
        })
    }

    /// Tick the countdown by one second.
    ///
    /// Returns true if the countdown just completed.
    pub fn tick(&mut self) -> bool {
        if self.state != CountdownState::Running {
            return false;
        }

        self.remaining_seconds -= 1;

        if self.remaining_seconds == 0 {
            self.state = CountdownState::Completed;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn remaining(&self) -> Remaining {
        Remaining::from_seconds(self.remaining_seconds)
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    #[must_use]
    pub const fn total(&self) -> Duration {
        Duration::seconds(self.total_seconds)
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        Duration::seconds(self.total_seconds - self.remaining_seconds)
    }

    /// Get progress as a fraction (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        1.0 - (self.remaining_seconds as f64 / self.total_seconds as f64)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == CountdownState::Completed
    }

    #[must_use]
    pub const fn state(&self) -> CountdownState {
        self.state
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
