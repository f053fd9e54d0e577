//! File logging.
//!
//! The terminal belongs to the TUI, so events go to a log file in the user's
//! data directory. `RUST_LOG` overrides the default filter.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::APP_DIR;

/// Log file name inside `<data_dir>/inspection-form/`.
pub const LOG_FILE: &str = "inspection-form.log";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "inspection_form=info";

/// Errors raised while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot install log subscriber: {0}")]
    Install(String),
}

/// `<data_dir>/inspection-form/inspection-form.log`, if the platform has a data dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Opens `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open = || -> io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };
    open().map_err(|source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Installs the global subscriber writing plain-text events to `path`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(path: &Path) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
