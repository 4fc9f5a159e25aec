use crate::{
    error::report::ReportError,
    model::{
        report::{
            RenderedReport, ReportField, ReportFilter, ReportKind, ReportPayload, ReportRow,
            RowMetrics,
        },
        template::{FieldTemplate, ReportTemplate},
    },
    service::report::filter::{apply_filters, filter_keyword, filter_notes},
    util::template::render,
};

/// Maximum ranked rows in one report; Discord allows 25 fields per embed.
pub const MAX_REPORT_FIELDS: usize = 18;

const ROMAN_ENHANCE: [&str; 11] = ["_", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Roman numeral for enhancement levels 1 to 10, `_` for anything else.
pub fn map_enhance(enhance: i64) -> &'static str {
    usize::try_from(enhance)
        .ok()
        .and_then(|level| ROMAN_ENHANCE.get(level))
        .copied()
        .unwrap_or("_")
}

/// Truncates to an integer and groups thousands with commas.
pub fn format_thousands(value: f64) -> String {
    let truncated = value.trunc() as i64;
    let digits = truncated.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if truncated < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

pub fn format_decimal(value: f64) -> String {
    format!("{:.3}", value)
}

/// Renders a report payload into embed-ready text.
///
/// Rows are filtered, the first 18 are ranked in payload order and the
/// template's trailer is always appended. A row missing a required column
/// stops rendering at that row; the rows before it are kept.
///
/// # Arguments
/// - `payload` - Body returned by the report API
/// - `template` - Layout for this report kind
/// - `kind` - Which metric columns the rows carry
/// - `filter` - Filters requested by the user
/// - `icon_url` - Value for the footer's `{icon_url}` placeholder
///
/// # Returns
/// - `Ok(RenderedReport)` - The rendered report, possibly partial
/// - `Err(ReportError::InvalidTimestamp)` - `report_time` could not be parsed
/// - `Err(ReportError::InvalidPayload)` - The rows could not be decoded
pub fn render_report(
    payload: &ReportPayload,
    template: &ReportTemplate,
    kind: ReportKind,
    filter: &ReportFilter,
    icon_url: &str,
) -> Result<RenderedReport, ReportError> {
    let timestamp = payload.timestamp()?;
    let rows = apply_filters(payload.rows()?, filter);

    let keyword = filter_keyword(filter);
    let title = render(&template.title, &[("kind", kind.path()), ("keyword", keyword.as_str())])
        .trim_end()
        .to_string();

    let mut description = template.description.clone();
    for note in filter_notes(filter, &template.notes) {
        description.push('\n');
        description.push_str(&note);
    }

    let mut fields = Vec::with_capacity(rows.len().min(MAX_REPORT_FIELDS));
    for (index, raw) in rows.iter().take(MAX_REPORT_FIELDS).enumerate() {
        match ReportRow::from_raw(kind, index, raw) {
            Ok(row) => fields.push(render_row(&template.field, index + 1, &row)),
            Err(e) => {
                tracing::error!("Stopped rendering {} report: {}", kind.path(), e);
                break;
            }
        }
    }

    let footer_icon_url = template
        .footer
        .icon_url
        .as_ref()
        .map(|pattern| render(pattern, &[("icon_url", icon_url)]))
        .filter(|url| !url.is_empty());

    Ok(RenderedReport {
        title,
        description,
        footer_text: template.footer.text.clone(),
        footer_icon_url,
        fields,
        trailer: ReportField {
            name: template.trailer.name.clone(),
            value: template.trailer.value.clone(),
            inline: template.trailer.inline,
        },
        timestamp,
    })
}

fn render_row(template: &FieldTemplate, rank: usize, row: &ReportRow) -> ReportField {
    let rank = rank.to_string();
    let price = format_thousands(row.price);
    let stock = row.stock.to_string();
    let metrics = match &row.metrics {
        RowMetrics::Profit { profit, rate } => [
            ("profit", format_thousands(*profit)),
            ("rate", format_decimal(*rate)),
        ],
        RowMetrics::Trends {
            volume_change,
            avg_trades_per_day,
        } => [
            ("volume_change", format_thousands(*volume_change)),
            ("avg_trades", format_decimal(*avg_trades_per_day)),
        ],
    };

    let mut values = vec![
        ("rank", rank.as_str()),
        ("category", row.category.as_str()),
        ("enhance", map_enhance(row.enhance)),
        ("name", row.name.as_str()),
        ("price", price.as_str()),
        ("stock", stock.as_str()),
    ];
    values.extend(metrics.iter().map(|(key, value)| (*key, value.as_str())));

    ReportField {
        name: render(&template.name, &values),
        value: render(&template.value, &values),
        inline: template.inline,
    }
}
