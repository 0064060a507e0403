//! Log file setup
//!
//! The picker owns the terminal, so log output goes to a file instead of
//! stderr: `<data_dir>/shelfr/shelfr.log` (`~/.local/share/shelfr/shelfr.log`
//! on Linux). The filter comes from `SHELFR_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "SHELFR_LOG";

/// Default location of the log file
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("shelfr").join("shelfr.log"))
}

/// Build the log filter from `SHELFR_LOG`, falling back to `info`
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the default log file
///
/// Does nothing if no data directory can be determined or a subscriber is
/// already installed.
///
/// # Errors
///
/// Returns an `io::Error` if the log directory or file cannot be created.
pub fn init() -> io::Result<()> {
    let Some(path) = default_log_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
