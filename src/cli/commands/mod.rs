//! Command implementations for pomo.
//!
//! Each command returns the text to print on stdout; session commands also
//! draw their live countdown while they run.

mod completions;
mod session;
mod timeline;

pub use completions::completions;
pub use session::{run_session, session};
pub use timeline::{show_timeline, timeline};

use crate::cli::args::{Commands, OutputFormat};
use crate::config::Paths;
use crate::error::PomoError;
use crate::features::focus::SessionKind;

/// Execute a parsed command.
///
/// # Errors
///
/// Returns whatever error the command hits; nothing is retried.
pub fn dispatch(command: Commands, paths: &Paths, format: OutputFormat) -> Result<String, PomoError> {
    match command {
        Commands::Pomodoro => session(SessionKind::Pomodoro, paths, format),
        Commands::ShortBreak => session(SessionKind::ShortBreak, paths, format),
        Commands::LongBreak => session(SessionKind::LongBreak, paths, format),
        Commands::Timeline(args) => timeline(paths, args.date.as_deref(), format),
        Commands::Completions { shell } => completions(shell),
        Commands::Unknown(words) => Err(PomoError::UnknownCommand(
            words.into_iter().next().unwrap_or_default(),
        )),
    }
}
