//! pomo - a Pomodoro timer for the command line
//!
//! Runs work and break countdowns, records each completed session to a
//! per-day JSON journal and renders a one-line timeline of the day.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
