//! Submission to the shared Google Sheets worksheet.
//!
//! The wizard only sees [`RowSink`]; [`SheetsClient`] is the production
//! implementation. One call appends exactly one row, or fails with a
//! [`SubmitError`] carrying the underlying message.

mod auth;
mod client;
mod credentials;
mod error;

pub use auth::{Claims, SCOPES, sign_assertion};
pub use client::{SheetsClient, append_url};
pub use credentials::{DEFAULT_TOKEN_URI, ServiceAccountKey};
pub use error::SubmitError;

use crate::model::SubmissionRow;

/// Destination for submitted inspection rows.
pub trait RowSink {
    /// Appends `row` to the end of the store. Blocks until done.
    fn append_row(&self, row: &SubmissionRow) -> Result<(), SubmitError>;
}
