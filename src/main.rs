mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{bot::start, config::Config, error::AppError, scheduler::report};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let state = startup::build_state(config).await?;

    tracing::info!("Starting guild bot");

    let shutdown = state.shutdown.clone();
    let client = start::init_bot(state.clone()).await?;

    // Start the scheduled report with the bot's HTTP client
    let scheduler_state = state.clone();
    let scheduler_http = client.http.clone();
    tokio::spawn(async move {
        if let Err(e) = report::start_scheduler(scheduler_state, scheduler_http).await {
            tracing::error!("Report scheduler error: {}", e);
        }
    });

    start::start_bot(client, shutdown).await
}
