use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while fetching or rendering a market report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report API answered with a non-success status.
    ///
    /// Shown to the user as plain text.
    #[error("status code: {}", .0.as_u16())]
    Status(StatusCode),

    /// The report API could not be reached or the body could not be read.
    #[error("An error occurred: {0}")]
    Request(#[from] reqwest::Error),

    /// The payload is not shaped like a report.
    #[error("Invalid report payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// `report_time` is not an ISO-8601 timestamp.
    #[error("Invalid report timestamp '{0}'")]
    InvalidTimestamp(String),

    /// A displayed row lacks a key required by the report kind.
    #[error("Report row {row} is missing field '{field}'")]
    MissingField {
        /// Zero-based index of the row among the filtered rows
        row: usize,
        /// The missing (or mistyped) key
        field: &'static str,
    },
}
