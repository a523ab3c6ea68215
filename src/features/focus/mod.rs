//! Pomodoro sessions and their journal.
//!
//! - Countdown sessions for work, short breaks and long breaks
//! - Per-day journal of completed sessions
//! - One-line timeline of a day

pub mod clock;
pub mod journal;
pub mod runner;
pub mod session;
pub mod timeline;
pub mod timer;

pub use clock::{Clock, SystemClock};
pub use journal::JournalStore;
pub use runner::{Progress, SessionRunner, TICK};
pub use session::{SessionKind, SessionRecord};
pub use timeline::{render, TimelineSummary, EMPTY_TIMELINE};
pub use timer::{render_progress_bar, Countdown, CountdownState, Remaining};
