use super::*;
use crate::service::report::builder::build_report_embed;

/// Tests that the embed carries every ranked field followed by the trailer.
///
/// Expected: title set, 19 fields with the trailer last
#[test]
fn builds_embed_with_trailer_last() {
    let report = render_report(
        &payload(profit_rows(25)),
        &profit_template(),
        ReportKind::Profit,
        &ReportFilter::default(),
        ICON_URL,
    )
    .unwrap();

    let embed = build_report_embed(&report).unwrap();
    let json = serde_json::to_value(&embed).unwrap();

    assert_eq!(json["title"], "Market profit report");
    assert_eq!(json["footer"]["icon_url"], ICON_URL);

    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), MAX_REPORT_FIELDS + 1);
    assert_eq!(fields[MAX_REPORT_FIELDS]["name"], "P.S.");
}
