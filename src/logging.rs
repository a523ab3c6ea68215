//! Diagnostic logging to stderr.

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Raise `base` by `steps` levels of verbosity, saturating at trace.
#[must_use]
pub fn raise_level(base: LevelFilter, steps: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];

    let index = LEVELS.iter().position(|l| *l == base).unwrap_or(2);
    LEVELS[(index + usize::from(steps)).min(LEVELS.len() - 1)]
}

/// Build the filter: `RUST_LOG` wins, then `configured`, then [`DEFAULT_LEVEL`].
///
/// # Errors
///
/// Returns an error if `RUST_LOG` or `configured` is not a valid filter.
pub fn filter(verbosity: u8, configured: Option<&str>) -> Result<EnvFilter> {
    if let Ok(directives) = std::env::var(EnvFilter::DEFAULT_ENV) {
        return EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid RUST_LOG value '{directives}'"));
    }

    let base = match configured {
        Some(level) => level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid log level '{level}'"))?,
        None => DEFAULT_LEVEL,
    };

    let level = raise_level(base, verbosity);
    Ok(EnvFilter::new(format!(
        "{}={level}",
        env!("CARGO_PKG_NAME").replace('-', "_")
    )))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn enable_logging(verbosity: u8, configured: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity, configured)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_level() {
        assert_eq!(raise_level(LevelFilter::WARN, 0), LevelFilter::WARN);
        assert_eq!(raise_level(LevelFilter::WARN, 1), LevelFilter::INFO);
        assert_eq!(raise_level(LevelFilter::WARN, 2), LevelFilter::DEBUG);
        assert_eq!(raise_level(LevelFilter::WARN, 9), LevelFilter::TRACE);
        assert_eq!(raise_level(LevelFilter::OFF, 1), LevelFilter::ERROR);
    }

    #[test]
    fn test_rejects_bad_configured_level() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            return;
        }
        assert!(filter(0, Some("loud")).is_err());
        assert!(filter(0, Some("debug")).is_ok());
        assert!(filter(3, None).is_ok());
    }
}
