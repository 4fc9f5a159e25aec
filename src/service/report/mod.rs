//! Market report rendering.
//!
//! `ReportService` fetches a payload through the `ReportClient` and renders it
//! with the language's report template. The pure formatting lives in `format`
//! and `filter`; `builder` turns the result into a serenity embed.

pub mod builder;
pub mod filter;
pub mod format;

use crate::{
    data::report::ReportClient,
    error::report::ReportError,
    model::{
        report::{RenderedReport, ReportFilter, ReportKind},
        template::ReportTemplates,
    },
    service::report::format::render_report,
};

pub struct ReportService<'a> {
    client: &'a ReportClient,
    templates: &'a ReportTemplates,
}

impl<'a> ReportService<'a> {
    pub fn new(client: &'a ReportClient, templates: &'a ReportTemplates) -> Self {
        Self { client, templates }
    }

    /// Fetches the latest report of `kind` and renders it.
    ///
    /// # Arguments
    /// - `kind` - Profit or trends
    /// - `filter` - Filters to apply; `period_days` is sent to the API
    /// - `icon_url` - Bot avatar URL for the footer
    ///
    /// # Returns
    /// - `Ok(RenderedReport)` - Rendered report
    /// - `Err(ReportError)` - Request failed or the payload was unusable
    pub async fn generate(
        &self,
        kind: ReportKind,
        filter: &ReportFilter,
        icon_url: &str,
    ) -> Result<RenderedReport, ReportError> {
        let payload = self.client.fetch(kind, filter.period_days).await?;

        let report = render_report(
            &payload,
            self.templates.for_kind(kind),
            kind,
            filter,
            icon_url,
        )?;

        tracing::info!(
            "Rendered {} report with {} rows",
            kind.path(),
            report.fields.len()
        );

        Ok(report)
    }
}
