use crate::{
    model::{
        report::{ReportFilter, ReportKind, ReportPayload},
        template::ReportTemplate,
    },
    service::report::format::{render_report, MAX_REPORT_FIELDS},
};
use serde_json::{json, Value};
use test_utils::fixture::{profit_row, report_payload, trends_row};

mod build_embed;
mod filter;
mod render;

const REPORT_TIME: &str = "2024-05-01T12:00:00";
const ICON_URL: &str = "https://cdn.discordapp.com/avatars/1/abc.png";

fn payload(rows: Vec<Value>) -> ReportPayload {
    serde_json::from_value(report_payload(REPORT_TIME, rows)).unwrap()
}

fn profit_template() -> ReportTemplate {
    ReportTemplate::default_for(ReportKind::Profit)
}

fn profit_rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| profit_row(&format!("Item {}", i), "Weapon", 0))
        .collect()
}
