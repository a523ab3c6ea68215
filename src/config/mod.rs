//! Configuration management for pomo.
//!
//! This module resolves the data directory and loads the optional
//! `config.yaml` inside it.

mod paths;
mod settings;

pub use paths::{Paths, APP_DIR};
pub use settings::{ColorSetting, Config, GeneralConfig};
