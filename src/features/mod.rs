//! Feature implementations for pomo.
//!
//! - Focus sessions: countdowns, the session runner, the per-day journal and
//!   the timeline

pub mod focus;
