use serde_json::Value;

use crate::{
    model::{
        report::{integer_value, RawRow, ReportFilter},
        template::FilterNotes,
    },
    service::report::format::map_enhance,
    util::template::render,
};

/// Applies the category, name and enhance filters in that order.
///
/// Rows lacking a filtered key never match that filter. `period_days` is
/// not applied here.
pub fn apply_filters(rows: Vec<RawRow>, filter: &ReportFilter) -> Vec<RawRow> {
    let name = filter.name.as_ref().map(|name| name.to_lowercase());

    rows.into_iter()
        .filter(|row| match &filter.category {
            Some(category) => row.get("category").and_then(Value::as_str) == Some(category.as_str()),
            None => true,
        })
        .filter(|row| match &name {
            Some(name) => row
                .get("name")
                .and_then(Value::as_str)
                .is_some_and(|item| item.to_lowercase().contains(name.as_str())),
            None => true,
        })
        .filter(|row| match filter.enhance {
            Some(enhance) => row.get("enhance").and_then(integer_value) == Some(enhance),
            None => true,
        })
        .collect()
}

/// Description lines for each applied filter, in filter order.
pub fn filter_notes(filter: &ReportFilter, notes: &FilterNotes) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(category) = &filter.category {
        lines.push(render(&notes.category, &[("category", category.as_str())]));
    }
    if let Some(name) = &filter.name {
        lines.push(render(&notes.name, &[("name", name.as_str())]));
    }
    if let Some(enhance) = filter.enhance {
        lines.push(render(&notes.enhance, &[("enhance", map_enhance(enhance))]));
    }
    if let Some(period) = filter.period_days {
        let period = period.to_string();
        lines.push(render(&notes.period, &[("period", period.as_str())]));
    }

    lines
}

/// Applied filter values joined by spaces, for the `{keyword}` title placeholder.
pub fn filter_keyword(filter: &ReportFilter) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(category) = &filter.category {
        parts.push(category.clone());
    }
    if let Some(name) = &filter.name {
        parts.push(name.clone());
    }
    if let Some(enhance) = filter.enhance {
        parts.push(map_enhance(enhance).to_string());
    }

    parts.join(" ")
}
