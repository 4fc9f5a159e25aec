//! State shared by every event handler, command and scheduled job.
//!
//! The state is built once at startup and cloned into the serenity event
//! handler and the scheduler. Every field is cheap to clone:
//! - `Arc<Config>` is reference counted
//! - `AssetStore` and `ExtensionRegistry` share their data through `Arc`
//! - `ReportClient` wraps a `reqwest::Client`, which uses an `Arc` internally

use std::sync::Arc;
use tokio::sync::Notify;

use crate::{
    config::Config, data::asset::AssetStore, data::report::ReportClient,
    service::extension::ExtensionRegistry,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// Reply tables, texts and templates; swapped on `/reload`.
    pub assets: AssetStore,

    pub extensions: ExtensionRegistry,

    pub report_client: ReportClient,

    /// Configured owner, or the application owner when none is configured.
    pub owner_id: Option<u64>,

    /// Notified by `/shutdown` to stop the gateway connection.
    pub shutdown: Arc<Notify>,
}

impl AppState {
    /// Creates the state with the extensions listed in the configuration loaded.
    ///
    /// # Arguments
    /// - `config` - Process configuration
    /// - `assets` - Loaded asset store
    /// - `report_client` - Client for the report API
    /// - `owner_id` - Resolved bot owner
    pub fn new(
        config: Config,
        assets: AssetStore,
        report_client: ReportClient,
        owner_id: Option<u64>,
    ) -> Self {
        let extensions = ExtensionRegistry::new(config.extensions.iter().copied());

        Self {
            config: Arc::new(config),
            assets,
            extensions,
            report_client,
            owner_id,
            shutdown: Arc::new(Notify::new()),
        }
    }
}
