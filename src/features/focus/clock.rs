//! Wall-clock access for sessions.

use chrono::{Local, NaiveDateTime};

/// Source of local time and the blocking wait between ticks.
///
/// Sessions read the time and sleep only through this trait, so tests can
/// run a countdown without waiting on real seconds.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Block the current thread for `duration`.
    fn sleep(&self, duration: std::time::Duration);
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: std::time::Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock whose time only moves when something sleeps on it.
#[cfg(test)]
#[derive(Debug)]
pub struct ManualClock {
    now: std::cell::Cell<NaiveDateTime>,
    sleeps: std::cell::Cell<u32>,
}

#[cfg(test)]
impl ManualClock {
    pub const fn at(now: NaiveDateTime) -> Self {
        Self {
            now: std::cell::Cell::new(now),
            sleeps: std::cell::Cell::new(0),
        }
    }

    pub fn sleeps(&self) -> u32 {
        self.sleeps.get()
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn sleep(&self, duration: std::time::Duration) {
        let step = chrono::Duration::from_std(duration).unwrap_or_else(|_| chrono::Duration::zero());
        self.now.set(self.now.get() + step);
        self.sleeps.set(self.sleeps.get() + 1);
    }
}
