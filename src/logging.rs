//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive sessions only log when a file is
//! configured. Summary mode logs to stderr.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when neither the config nor the command line sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Logging disabled.
    Off,
    File(PathBuf),
    Stderr,
}

/// Installs the global subscriber for `target`.
pub fn init(target: &LogTarget, level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level '{level}'"))?;

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("Failed to install logger: {e}"))
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("Failed to install logger: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_installs_nothing() {
        assert!(init(&LogTarget::Off, DEFAULT_LEVEL).is_ok());
    }

    #[test]
    fn test_bad_level_is_rejected() {
        assert!(init(&LogTarget::Off, "huella=loud").is_err());
    }
}
