//! Market report payloads, filters and rendered output.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::report::ReportError;

/// A JSON object describing one item row of a report.
pub type RawRow = Map<String, Value>;

/// Which report the API should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Profit,
    Trends,
}

impl ReportKind {
    /// Path segment of `GET {api}/report/{kind}`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Profit => "profit",
            Self::Trends => "trends",
        }
    }
}

/// Report kind as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKindOption {
    Kind(ReportKind),
    Unrecognized(String),
}

impl ReportKindOption {
    pub fn parse(option: &str) -> Self {
        match option.trim().to_lowercase().as_str() {
            "profit" | "p" | "overall" | "o" | "all" | "a" => Self::Kind(ReportKind::Profit),
            "trends" | "trend" | "t" => Self::Kind(ReportKind::Trends),
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Optional narrowing of the displayed rows.
///
/// `period_days` is forwarded to the API and only annotates the description;
/// rows are never filtered by period locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub category: Option<String>,
    /// Case-insensitive substring of the item name.
    pub name: Option<String>,
    pub enhance: Option<i64>,
    pub period_days: Option<u32>,
}

/// Body returned by the report API.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportPayload {
    #[serde(alias = "timestamp")]
    pub report_time: String,
    #[serde(alias = "rows")]
    pub report: ReportRows,
}

/// The API either embeds the rows directly or as a JSON-encoded string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReportRows {
    Rows(Vec<RawRow>),
    Encoded(String),
}

impl ReportPayload {
    /// Returns the rows in the order the API sent them.
    ///
    /// # Returns
    /// - `Ok(Vec<RawRow>)` - Decoded rows
    /// - `Err(ReportError::InvalidPayload)` - The encoded string is not an array of objects
    pub fn rows(&self) -> Result<Vec<RawRow>, ReportError> {
        match &self.report {
            ReportRows::Rows(rows) => Ok(rows.clone()),
            ReportRows::Encoded(encoded) => Ok(serde_json::from_str(encoded)?),
        }
    }

    /// Parses `report_time` as RFC 3339, or as a naive ISO-8601 time in UTC.
    pub fn timestamp(&self) -> Result<DateTime<Utc>, ReportError> {
        let raw = self.report_time.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(parsed.with_timezone(&Utc));
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|format| chrono::NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc())
            .ok_or_else(|| ReportError::InvalidTimestamp(self.report_time.clone()))
    }
}

/// Kind-specific columns of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowMetrics {
    Profit { profit: f64, rate: f64 },
    Trends { volume_change: f64, avg_trades_per_day: f64 },
}

/// A fully typed report row ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub category: String,
    pub name: String,
    pub enhance: i64,
    pub price: f64,
    pub stock: i64,
    pub metrics: RowMetrics,
}

impl ReportRow {
    /// Extracts the columns `kind` needs from a raw row.
    ///
    /// # Arguments
    /// - `kind` - Report kind deciding which metric columns are required
    /// - `row` - Position of the row, used in the error
    /// - `raw` - The JSON object from the payload
    ///
    /// # Returns
    /// - `Ok(ReportRow)` - All required keys present with the expected types
    /// - `Err(ReportError::MissingField)` - First missing or mistyped key
    pub fn from_raw(kind: ReportKind, row: usize, raw: &RawRow) -> Result<Self, ReportError> {
        let metrics = match kind {
            ReportKind::Profit => RowMetrics::Profit {
                profit: number(raw, row, "profit")?,
                rate: number(raw, row, "rate")?,
            },
            ReportKind::Trends => RowMetrics::Trends {
                volume_change: number(raw, row, "volume_change")?,
                avg_trades_per_day: number(raw, row, "avg_trades_per_day")?,
            },
        };

        Ok(Self {
            category: text(raw, row, "category")?,
            name: text(raw, row, "name")?,
            enhance: integer(raw, row, "enhance")?,
            price: number(raw, row, "price")?,
            stock: integer(raw, row, "stock")?,
            metrics,
        })
    }
}

fn text(raw: &RawRow, row: usize, field: &'static str) -> Result<String, ReportError> {
    raw.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ReportError::MissingField { row, field })
}

fn number(raw: &RawRow, row: usize, field: &'static str) -> Result<f64, ReportError> {
    raw.get(field)
        .and_then(Value::as_f64)
        .ok_or(ReportError::MissingField { row, field })
}

/// Reads an integer column; float-encoded values such as `3.0` are truncated.
pub(crate) fn integer_value(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|v| v.trunc() as i64))
}

fn integer(raw: &RawRow, row: usize, field: &'static str) -> Result<i64, ReportError> {
    raw.get(field)
        .and_then(integer_value)
        .ok_or(ReportError::MissingField { row, field })
}

/// One embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A report ready to be turned into an embed.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub title: String,
    pub description: String,
    pub footer_text: String,
    pub footer_icon_url: Option<String>,
    /// Ranked rows, at most 18.
    pub fields: Vec<ReportField>,
    /// Postscript field, always present.
    pub trailer: ReportField,
    pub timestamp: DateTime<Utc>,
}
