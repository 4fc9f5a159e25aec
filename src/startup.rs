use std::time::Duration;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::{
        asset::{AssetPaths, AssetStore},
        report::ReportClient,
    },
    error::AppError,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "guild_bot=info,serenity=warn";
const REPORT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to info for the bot and
/// warnings for serenity.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Builds the HTTP client used for the report API.
///
/// Redirects are disabled so the configured API URL is the only host the bot
/// talks to.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(REPORT_REQUEST_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Returns the configured owner, or asks Discord for the application owner.
///
/// # Returns
/// - `Ok(Some(id))` - Owner known
/// - `Ok(None)` - No owner configured and the application has none (team owned)
/// - `Err(AppError::DiscordErr)` - Application info request failed
pub async fn resolve_owner_id(config: &Config) -> Result<Option<u64>, AppError> {
    if let Some(owner_id) = config.owner_id {
        return Ok(Some(owner_id));
    }

    let http = Http::new(&config.discord_token);
    let info = http.get_current_application_info().await?;
    let owner_id = info.owner.map(|owner| owner.id.get());

    match owner_id {
        Some(id) => tracing::info!("Using application owner {} as bot owner", id),
        None => tracing::warn!("No bot owner configured; owner-only commands are disabled"),
    }

    Ok(owner_id)
}

/// Loads assets, builds the report client and resolves the owner.
pub async fn build_state(config: Config) -> Result<AppState, AppError> {
    let assets = AssetStore::open(AssetPaths::from_config(&config))?;
    let report_client = ReportClient::new(setup_reqwest_client()?, &config.report_api_url)?;
    let owner_id = resolve_owner_id(&config).await?;

    Ok(AppState::new(config, assets, report_client, owner_id))
}
