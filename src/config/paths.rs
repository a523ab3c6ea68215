//! Path resolution for pomo data files.
//!
//! All pomo data lives in one directory, by default
//! `$XDG_DATA_HOME/pomodoro` or `~/.local/share/pomodoro`:
//! - `YYYY-MM-DD` - Session journal for one day
//! - `config.yaml` - Optional configuration file

use std::path::PathBuf;

use crate::error::PomoError;

/// Directory name used under the platform data directory.
pub const APP_DIR: &str = "pomodoro";

/// Paths to pomo data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Data root holding the journals
    pub root: PathBuf,
    /// Config file: `<root>/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve the data root from the environment.
    ///
    /// Uses `$XDG_DATA_HOME/pomodoro` when set, else `$HOME/.local/share/pomodoro`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, PomoError> {
        let data_home = match std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = std::env::var_os("HOME").ok_or_else(|| {
                    PomoError::Config("Could not determine home directory".to_string())
                })?;
                PathBuf::from(home).join(".local").join("share")
            }
        };

        Ok(Self::with_root(data_home.join(APP_DIR)))
    }

    /// Use `root` if given, otherwise resolve from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the environment has no home.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, PomoError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the data root exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomoError> {
        if !self.root.is_dir() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
