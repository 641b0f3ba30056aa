//! File logging for the demo binary.
//!
//! Stdout belongs to the TUI, so log output goes to
//! `<cache dir>/viewdesc/viewdesc.log`. The filter comes from `VIEWDESC_LOG`
//! and defaults to `viewdesc=info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ViewDescResult;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "VIEWDESC_LOG";

/// Filter used when `VIEWDESC_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "viewdesc=info";

const LOG_FILE: &str = "viewdesc.log";

/// Where the log file lives, if the platform has a cache directory.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("viewdesc").join(LOG_FILE))
}

/// Build the log filter from the environment.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log path, or `None` if there is no cache directory. A
/// subscriber that is already installed is left in place.
pub fn init_logging() -> ViewDescResult<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(target: "viewdesc::logging", path = %path.display(), "Logging started");
    }
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_file_path_shape() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("viewdesc/viewdesc.log"));
        }
    }

    #[test]
    #[serial]
    fn test_env_filter_default() {
        std::env::remove_var(LOG_ENV);
        assert_eq!(env_filter().to_string(), DEFAULT_FILTER);
    }

    #[test]
    #[serial]
    fn test_env_filter_from_env() {
        std::env::set_var(LOG_ENV, "viewdesc=debug");
        let filter = env_filter();
        std::env::remove_var(LOG_ENV);
        assert_eq!(filter.to_string(), "viewdesc=debug");
    }
}
