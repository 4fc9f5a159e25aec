//! Canned JSON bodies returned by the market report API.

pub mod report;

pub use report::{profit_row, report_payload, trends_row};
