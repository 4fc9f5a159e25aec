//! Report embed templates (`profit_report.json`, `trends_report.json`).

use serde::Deserialize;

use crate::model::report::ReportKind;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterTemplate {
    pub text: String,
    /// Pattern accepting `{icon_url}`, the bot's avatar.
    #[serde(default)]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldTemplate {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

/// Description lines appended for each applied filter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterNotes {
    pub category: String,
    pub name: String,
    pub enhance: String,
    pub period: String,
}

impl Default for FilterNotes {
    fn default() -> Self {
        Self {
            category: "Category: {category}".to_string(),
            name: "Name contains: {name}".to_string(),
            enhance: "Enhancement: {enhance}".to_string(),
            period: "Period: {period} days".to_string(),
        }
    }
}

/// Layout of a report embed.
///
/// `title` accepts `{kind}` and `{keyword}`. The row `field` patterns accept
/// `{rank} {category} {enhance} {name} {price} {stock}` plus `{profit} {rate}`
/// for profit reports and `{volume_change} {avg_trades}` for trend reports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportTemplate {
    pub title: String,
    pub description: String,
    pub footer: FooterTemplate,
    pub field: FieldTemplate,
    pub trailer: FieldTemplate,
    #[serde(default)]
    pub notes: FilterNotes,
}

impl ReportTemplate {
    /// Built-in layout used when the template file is absent.
    pub fn default_for(kind: ReportKind) -> Self {
        let value = match kind {
            ReportKind::Profit => {
                "Price {price} | Profit {profit} | Rate {rate} | Stock {stock}"
            }
            ReportKind::Trends => {
                "Price {price} | Stock {stock} | Volume {volume_change} | Trades/day {avg_trades}"
            }
        };

        Self {
            title: "Market {kind} report {keyword}".to_string(),
            description: "Top items from the latest market snapshot".to_string(),
            footer: FooterTemplate {
                text: "Market report".to_string(),
                icon_url: Some("{icon_url}".to_string()),
            },
            field: FieldTemplate {
                name: "{rank}. [{category}] {enhance} {name}".to_string(),
                value: value.to_string(),
                inline: true,
            },
            trailer: FieldTemplate {
                name: "P.S.".to_string(),
                value: "Prices are a snapshot and may have changed.".to_string(),
                inline: false,
            },
            notes: FilterNotes::default(),
        }
    }
}

/// One template per report kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTemplates {
    pub profit: ReportTemplate,
    pub trends: ReportTemplate,
}

impl ReportTemplates {
    pub fn for_kind(&self, kind: ReportKind) -> &ReportTemplate {
        match kind {
            ReportKind::Profit => &self.profit,
            ReportKind::Trends => &self.trends,
        }
    }
}

impl Default for ReportTemplates {
    fn default() -> Self {
        Self {
            profit: ReportTemplate::default_for(ReportKind::Profit),
            trends: ReportTemplate::default_for(ReportKind::Trends),
        }
    }
}
