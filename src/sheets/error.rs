use std::path::PathBuf;

/// Errors that can occur while appending a row to the worksheet.
///
/// Every variant except [`CredentialsMissing`](Self::CredentialsMissing)
/// keeps the underlying message so it can be shown to the inspector as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The service-account key file does not exist.
    #[error("credentials file not found: {}", .0.display())]
    CredentialsMissing(PathBuf),

    /// The key file could not be read, parsed, or its private key is unusable.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The token endpoint refused the assertion or could not be reached.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The append request never got a response.
    #[error("{0}")]
    Transport(String),

    /// The Sheets API answered with a non-success status.
    #[error("Sheets API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The HTTP client or its runtime could not be set up.
    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}
