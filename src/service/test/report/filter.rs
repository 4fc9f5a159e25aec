use super::*;

fn mixed_rows() -> Vec<Value> {
    vec![
        profit_row("Iron Sword", "Weapon", 3),
        profit_row("Silver Ring", "Accessory", 3),
        profit_row("Steel Sword", "Weapon", 5),
        profit_row("sword of dawn", "Weapon", 3),
    ]
}

/// Tests the enhance filter with its description note.
///
/// Expected: only enhance 3 rows, note shows "III"
#[test]
fn filters_by_enhance() {
    let filter = ReportFilter {
        enhance: Some(3),
        ..ReportFilter::default()
    };

    let report = render_report(
        &payload(mixed_rows()),
        &profit_template(),
        ReportKind::Profit,
        &filter,
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), 3);
    assert!(report.fields.iter().all(|field| field.name.contains(" III ")));
    assert!(report.description.ends_with("\nEnhancement: III"));
    assert_eq!(report.title, "Market profit report III");
}

/// Tests that the name filter is a case-insensitive substring match.
///
/// Expected: every row with "sword" in any case
#[test]
fn filters_by_name_case_insensitively() {
    let filter = ReportFilter {
        name: Some("SWORD".to_string()),
        ..ReportFilter::default()
    };

    let report = render_report(
        &payload(mixed_rows()),
        &profit_template(),
        ReportKind::Profit,
        &filter,
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), 3);
}

/// Tests that filters combine in sequence.
///
/// Expected: only the Weapon rows containing "sword" at enhance 3
#[test]
fn combines_filters() {
    let filter = ReportFilter {
        category: Some("Weapon".to_string()),
        name: Some("sword".to_string()),
        enhance: Some(3),
        period_days: Some(7),
    };

    let report = render_report(
        &payload(mixed_rows()),
        &profit_template(),
        ReportKind::Profit,
        &filter,
        ICON_URL,
    )
    .unwrap();

    let names: Vec<_> = report.fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["1. [Weapon] III Iron Sword", "2. [Weapon] III sword of dawn"]
    );
    assert_eq!(report.title, "Market profit report Weapon sword III");
    assert!(report.description.contains("Category: Weapon"));
    assert!(report.description.contains("Name contains: sword"));
    assert!(report.description.contains("Period: 7 days"));
}

/// Tests that the period only annotates and never drops rows.
///
/// Expected: every row kept, period note present
#[test]
fn period_only_annotates() {
    let filter = ReportFilter {
        period_days: Some(30),
        ..ReportFilter::default()
    };

    let report = render_report(
        &payload(mixed_rows()),
        &profit_template(),
        ReportKind::Profit,
        &filter,
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), 4);
    assert!(report.description.ends_with("Period: 30 days"));
}

/// Tests that rows without the filtered key are dropped by that filter.
///
/// Expected: only the row carrying the category
#[test]
fn rows_without_filtered_key_do_not_match() {
    let mut unlabelled = profit_row("Mystery", "Weapon", 0);
    unlabelled.as_object_mut().unwrap().remove("category");

    let filter = ReportFilter {
        category: Some("Weapon".to_string()),
        ..ReportFilter::default()
    };

    let report = render_report(
        &payload(vec![unlabelled, profit_row("Axe", "Weapon", 0)]),
        &profit_template(),
        ReportKind::Profit,
        &filter,
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), 1);
    assert_eq!(report.fields[0].name, "1. [Weapon] _ Axe");
}

/// Tests that a filter matching nothing still yields a report.
///
/// Expected: no ranked fields, trailer present
#[test]
fn no_matches_keeps_trailer() {
    let filter = ReportFilter {
        category: Some("Armor".to_string()),
        ..ReportFilter::default()
    };

    let report = render_report(
        &payload(mixed_rows()),
        &profit_template(),
        ReportKind::Profit,
        &filter,
        ICON_URL,
    )
    .unwrap();

    assert!(report.fields.is_empty());
    assert_eq!(report.trailer.name, "P.S.");
}

/// Tests that a float-encoded enhance level matches the integer filter.
///
/// Expected: the `3.0` row is kept and rendered as "III"
#[test]
fn float_encoded_enhance_matches_filter() {
    let mut ring = profit_row("Ring", "buff", 0);
    ring.as_object_mut()
        .unwrap()
        .insert("enhance".to_string(), json!(3.0));

    let filter = ReportFilter {
        enhance: Some(3),
        ..ReportFilter::default()
    };

    let report = render_report(
        &payload(vec![ring, profit_row("Axe", "Weapon", 5)]),
        &profit_template(),
        ReportKind::Profit,
        &filter,
        ICON_URL,
    )
    .unwrap();

    assert_eq!(report.fields.len(), 1);
    assert_eq!(report.fields[0].name, "1. [buff] III Ring");
}
