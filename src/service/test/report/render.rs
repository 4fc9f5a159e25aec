use super::*;

/// Tests that more than 18 rows are clamped and the trailer still appended.
///
/// Expected: 18 ranked fields plus the trailer
#[test]
fn clamps_to_eighteen_rows() {
    let report = render_report(
        &payload(profit_rows(25)),
        &profit_template(),
        ReportKind::Profit,
        &ReportFilter::default(),
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), MAX_REPORT_FIELDS);
    assert_eq!(report.fields[0].name, "1. [Weapon] _ Item 0");
    assert_eq!(report.fields[17].name, "18. [Weapon] _ Item 17");
    assert_eq!(report.trailer.name, "P.S.");
}

/// Tests that fewer rows than the limit are all shown.
///
/// Expected: one field per row
#[test]
fn fewer_rows_are_all_shown() {
    let report = render_report(
        &payload(profit_rows(3)),
        &profit_template(),
        ReportKind::Profit,
        &ReportFilter::default(),
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), 3);
}

/// Tests the profit value formatting.
///
/// Verifies thousands grouping with truncation and three decimals for rate.
///
/// Expected: "Price 1,234,567 | Profit 98,765 | Rate 0.123 | Stock 42"
#[test]
fn formats_profit_values() {
    let report = render_report(
        &payload(vec![profit_row("Ring", "Accessory", 3)]),
        &profit_template(),
        ReportKind::Profit,
        &ReportFilter::default(),
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields[0].name, "1. [Accessory] III Ring");
    assert_eq!(
        report.fields[0].value,
        "Price 1,234,567 | Profit 98,765 | Rate 0.123 | Stock 42"
    );
    assert!(report.fields[0].inline);
}

/// Tests the trend value formatting.
///
/// Expected: volume grouped, trades per day with three decimals
#[test]
fn formats_trend_values() {
    let report = render_report(
        &payload(vec![trends_row("Bow", "Weapon", 10)]),
        &ReportTemplate::default_for(ReportKind::Trends),
        ReportKind::Trends,
        &ReportFilter::default(),
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields[0].name, "1. [Weapon] X Bow");
    assert_eq!(
        report.fields[0].value,
        "Price 5,000 | Stock 7 | Volume 2,500 | Trades/day 1.500"
    );
}

/// Tests that a row missing a required column stops rendering there.
///
/// Expected: rows before the broken one kept, trailer present
#[test]
fn missing_column_returns_partial_report() {
    let mut rows = profit_rows(2);
    rows.push(json!({ "name": "Broken", "category": "Weapon", "enhance": 0 }));
    rows.extend(profit_rows(2));

    let report = render_report(
        &payload(rows),
        &profit_template(),
        ReportKind::Profit,
        &ReportFilter::default(),
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), 2);
    assert_eq!(report.trailer.value, profit_template().trailer.value);
}

/// Tests timestamp parsing and the title/footer placeholders.
///
/// Expected: naive time read as UTC, kind in title, icon in footer
#[test]
fn fills_title_footer_and_timestamp() {
    let report = render_report(
        &payload(profit_rows(1)),
        &profit_template(),
        ReportKind::Profit,
        &ReportFilter::default(),
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.title, "Market profit report");
    assert_eq!(report.footer_icon_url.as_deref(), Some(ICON_URL));
    assert_eq!(report.timestamp.to_rfc3339(), "2024-05-01T12:00:00+00:00");
}

/// Tests that rows encoded as a JSON string are accepted.
///
/// Expected: rows decoded and rendered
#[test]
fn accepts_string_encoded_rows() {
    let encoded = serde_json::to_string(&profit_rows(2)).unwrap();
    let payload: ReportPayload = serde_json::from_value(json!({
        "report_time": "2024-05-01T12:00:00Z",
        "report": encoded,
    }))
    .unwrap();

    let report = render_report(
        &payload,
        &profit_template(),
        ReportKind::Profit,
        &ReportFilter::default(),
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), 2);
}

/// Tests that an unparseable report time is an error.
///
/// Expected: Err(ReportError::InvalidTimestamp)
#[test]
fn rejects_invalid_report_time() {
    let payload: ReportPayload = serde_json::from_value(report_payload("yesterday", vec![])).unwrap();

    let result = render_report(
        &payload,
        &profit_template(),
        ReportKind::Profit,
        &ReportFilter::default(),
        ICON_URL,
    );

    assert!(matches!(
        result,
        Err(crate::error::report::ReportError::InvalidTimestamp(_))
    ));
}

/// Tests the numeric helpers on edge values.
#[test]
fn formats_numbers() {
    use crate::service::report::format::{format_decimal, format_thousands, map_enhance};

    assert_eq!(format_thousands(0.0), "0");
    assert_eq!(format_thousands(999.99), "999");
    assert_eq!(format_thousands(1000.0), "1,000");
    assert_eq!(format_thousands(-1234567.8), "-1,234,567");
    assert_eq!(format_decimal(0.12345), "0.123");
    assert_eq!(format_decimal(1.5), "1.500");
    assert_eq!(map_enhance(0), "_");
    assert_eq!(map_enhance(4), "IV");
    assert_eq!(map_enhance(11), "_");
    assert_eq!(map_enhance(-1), "_");
}
