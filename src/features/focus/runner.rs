//! Runs a single session from start to natural completion.

use std::time::Duration;

use chrono::NaiveTime;
use tracing::{debug, info};

use super::clock::Clock;
use super::session::{SessionKind, SessionRecord};
use super::timer::Countdown;
use crate::error::PomoError;

/// Real-time length of one countdown tick.
pub const TICK: Duration = Duration::from_secs(1);

/// Receives progress while a session runs.
pub trait Progress {
    /// Called once with the recorded start time, before the first tick.
    fn started(&mut self, _kind: SessionKind, _at: NaiveTime) -> std::io::Result<()> {
        Ok(())
    }

    /// Called after every one-second decrement.
    fn tick(&mut self, countdown: &Countdown) -> std::io::Result<()>;
}

/// Discards progress.
impl Progress for () {
    fn tick(&mut self, _countdown: &Countdown) -> std::io::Result<()> {
        Ok(())
    }
}

/// Drives countdowns against a clock.
#[derive(Debug)]
pub struct SessionRunner<C: Clock> {
    clock: C,
}

impl<C: Clock> SessionRunner<C> {
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The clock sessions are timed against.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Run a session of `duration_seconds`, blocking one tick per second.
    ///
    /// `progress` sees the remaining time go from `duration_seconds - 1`
    /// down to zero, one update per tick. The start time is read before the
    /// first tick and the end time after the last.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidDuration` if `duration_seconds` is not
    /// positive; nothing is timed in that case. Returns `PomoError::Io` if
    /// `progress` fails to report, abandoning the session.
    pub fn start<P>(
        &self,
        kind: SessionKind,
        duration_seconds: i64,
        progress: &mut P,
    ) -> Result<SessionRecord, PomoError>
    where
        P: Progress + ?Sized,
    {
        let mut countdown = Countdown::new(duration_seconds)?;

        let started = self.clock.now().time();
        info!(%kind, duration_seconds, start = %started, "session started");
        progress.started(kind, started)?;

        while !countdown.is_completed() {
            self.clock.sleep(TICK);
            countdown.tick();
            progress.tick(&countdown)?;
        }

        let finished = self.clock.now().time();
        debug!(%kind, end = %finished, "countdown reached zero");

        Ok(SessionRecord::new(kind, started, finished))
    }

    /// Run a session of the kind's default length.
    ///
    /// # Errors
    ///
    /// See [`SessionRunner::start`].
    pub fn run<P>(&self, kind: SessionKind, progress: &mut P) -> Result<SessionRecord, PomoError>
    where
        P: Progress + ?Sized,
    {
        self.start(kind, kind.default_seconds(), progress)
    }
}
