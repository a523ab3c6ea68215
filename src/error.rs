//! Error types for pomo.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by pomo commands.
#[derive(Debug, Error)]
pub enum PomoError {
    /// A session was started with a non-positive duration.
    #[error("Invalid session duration: {0} seconds (must be greater than zero)")]
    InvalidDuration(i64),

    /// The journal could not be read or written.
    #[error("Failed to access journal {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A journal file exists but does not contain valid session records.
    #[error("Journal {} is corrupt: {source}", path.display())]
    CorruptJournal {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The command word is not one pomo knows.
    #[error("Unknown command '{0}'. Run 'pomo --help' for usage.")]
    UnknownCommand(String),

    /// Configuration or data directory problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PomoError {
    /// Build a persistence error for the given path.
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }
}
