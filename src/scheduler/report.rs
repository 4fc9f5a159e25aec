use serenity::all::{ChannelId, CreateMessage};
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::{
        extension::Extension,
        report::{ReportFilter, ReportKind},
    },
    service::report::{builder::build_report_embed, ReportService},
    state::AppState,
};

/// Starts the scheduled profit report
///
/// Does nothing unless both `REPORT_SCHEDULE` and `REPORT_CHANNEL_ID` are
/// configured. Each run posts the unfiltered profit report to the report
/// channel while `report_manager` is loaded.
///
/// # Arguments
/// - `state`: Shared application state
/// - `discord_http`: Discord HTTP client for posting the report
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let (Some(schedule), Some(channel_id)) = (
        state.config.report_schedule.clone(),
        state.config.report_channel_id,
    ) else {
        tracing::info!("Report schedule not configured, scheduler disabled");
        return Ok(());
    };

    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            if let Err(e) = post_scheduled_report(&state, &http, channel_id).await {
                tracing::error!("Error posting scheduled report: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Report scheduler started ({})", schedule);

    Ok(())
}

/// Fetches the profit report and posts it to `channel_id`.
async fn post_scheduled_report(
    state: &AppState,
    http: &Http,
    channel_id: u64,
) -> Result<(), AppError> {
    if !state.extensions.is_loaded(Extension::ReportManager).await {
        tracing::debug!("Skipping scheduled report, report_manager is not loaded");
        return Ok(());
    }

    let icon_url = http.get_current_user().await?.face();
    let assets = state.assets.current().await;
    let service = ReportService::new(&state.report_client, &assets.report_templates);

    let report = service
        .generate(ReportKind::Profit, &ReportFilter::default(), &icon_url)
        .await?;
    let embed = build_report_embed(&report)?;

    ChannelId::new(channel_id)
        .send_message(http, CreateMessage::new().embed(embed))
        .await?;

    tracing::info!("Posted scheduled report to {}", channel_id);

    Ok(())
}
