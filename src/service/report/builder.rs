use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::report::RenderedReport,
};

/// Builds the Discord embed for a rendered report.
///
/// The ranked fields come first, followed by the trailer. The embed timestamp
/// is the report's snapshot time.
///
/// # Arguments
/// - `report` - Report rendered by `render_report`
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(AppError::InternalErr)` - Snapshot time outside Discord's range
pub fn build_report_embed(report: &RenderedReport) -> Result<CreateEmbed, AppError> {
    let unix = report.timestamp.timestamp();
    let timestamp = Timestamp::from_unix_timestamp(unix).map_err(|e| {
        AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
            timestamp: unix,
            reason: e.to_string(),
        })
    })?;

    let mut footer = CreateEmbedFooter::new(&report.footer_text);
    if let Some(icon_url) = &report.footer_icon_url {
        footer = footer.icon_url(icon_url);
    }

    let mut embed = CreateEmbed::new()
        .title(&report.title)
        .description(&report.description)
        .footer(footer)
        .timestamp(timestamp);

    for field in report.fields.iter().chain(std::iter::once(&report.trailer)) {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    Ok(embed)
}
