use crate::config::ConfigError;
use crate::sheets::SubmitError;

/// Errors that stop the application before or while the TUI runs.
///
/// Submission failures during a session are not in here; they are shown on
/// the visual inspection screen and the inspector may retry.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The spreadsheet client could not be set up.
    #[error("Spreadsheet client error: {0}")]
    Client(#[from] SubmitError),
}
