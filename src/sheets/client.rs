use std::path::PathBuf;

use reqwest::Url;
use serde::Serialize;
use tokio::runtime::Runtime;

use super::RowSink;
use super::auth::fetch_access_token;
use super::credentials::ServiceAccountKey;
use super::error::SubmitError;
use crate::config::Config;
use crate::model::SubmissionRow;

const USER_AGENT: &str = concat!("inspection-form/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct AppendRequest<'a> {
    values: [&'a SubmissionRow; 1],
}

/// Google Sheets v4 client that appends rows to one fixed worksheet.
///
/// Calls block the caller: the client drives its async HTTP requests on a
/// private current-thread runtime. Nothing is retried.
pub struct SheetsClient {
    runtime: Runtime,
    http: reqwest::Client,
    credentials_path: PathBuf,
    append_url: Url,
}

impl SheetsClient {
    /// Builds a client for the spreadsheet and worksheet named in `config`.
    pub fn new(config: &Config) -> Result<Self, SubmitError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SubmitError::Setup(e.to_string()))?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SubmitError::Setup(e.to_string()))?;

        Ok(Self {
            runtime,
            http,
            credentials_path: config.credentials_path.clone(),
            append_url: append_url(&config.api_base, &config.spreadsheet_id, &config.worksheet)?,
        })
    }

    /// The `values:append` endpoint this client posts to.
    pub fn append_url(&self) -> &Url {
        &self.append_url
    }

    async fn append(&self, row: &SubmissionRow) -> Result<(), SubmitError> {
        let key = ServiceAccountKey::load(&self.credentials_path).await?;
        let token = fetch_access_token(&self.http, &key, chrono::Utc::now().timestamp()).await?;

        let response = self
            .http
            .post(self.append_url.clone())
            .bearer_auth(token)
            .json(&AppendRequest { values: [row] })
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubmitError::Api {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }
        Ok(())
    }
}

impl RowSink for SheetsClient {
    fn append_row(&self, row: &SubmissionRow) -> Result<(), SubmitError> {
        tracing::info!(cells = row.len(), "appending inspection row");
        let result = self.runtime.block_on(self.append(row));
        match &result {
            Ok(()) => tracing::info!("row appended"),
            Err(e) => tracing::warn!(error = %e, "row append failed"),
        }
        result
    }
}

/// Builds `{api_base}/v4/spreadsheets/{id}/values/'{worksheet}'!A1:append`.
///
/// Single quotes inside the worksheet name are doubled, as A1 notation requires.
pub fn append_url(api_base: &str, spreadsheet_id: &str, worksheet: &str) -> Result<Url, SubmitError> {
    let mut url = Url::parse(api_base)
        .map_err(|e| SubmitError::Setup(format!("invalid api_base {api_base:?}: {e}")))?;
    let range = format!("'{}'!A1:append", worksheet.replace('\'', "''"));
    url.path_segments_mut()
        .map_err(|()| SubmitError::Setup(format!("api_base cannot be a base URL: {api_base}")))?
        .pop_if_empty()
        .extend(["v4", "spreadsheets", spreadsheet_id, "values", range.as_str()]);
    url.query_pairs_mut()
        .append_pair("valueInputOption", "RAW")
        .append_pair("insertDataOption", "INSERT_ROWS");
    Ok(url)
}
