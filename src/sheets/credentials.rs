use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::error::SubmitError;

/// Token endpoint used when the key file does not name one.
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The parts of a Google service-account key file this crate needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    /// Reads and parses the key file at `path`.
    ///
    /// A missing file is reported as [`SubmitError::CredentialsMissing`];
    /// anything else wrong with it as [`SubmitError::InvalidCredentials`].
    pub async fn load(path: &Path) -> Result<Self, SubmitError> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SubmitError::CredentialsMissing(path.to_path_buf()));
            }
            Err(e) => {
                return Err(SubmitError::InvalidCredentials(format!(
                    "{}: {e}",
                    path.display()
                )));
            }
        };
        Self::parse(&content)
    }

    /// Parses key-file JSON.
    pub fn parse(json: &str) -> Result<Self, SubmitError> {
        serde_json::from_str(json).map_err(|e| SubmitError::InvalidCredentials(e.to_string()))
    }
}
