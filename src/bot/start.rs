use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use tokio::sync::Notify;

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `state` - Shared application state, cloned into the handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to connect
/// - `Err(AppError::DiscordErr)` - Client could not be built (e.g. invalid token)
pub async fn init_bot(state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let token = state.config.discord_token.clone();
    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Runs the gateway connection until it fails or `shutdown` is notified.
///
/// On shutdown every shard is stopped before returning.
pub async fn start_bot(mut client: Client, shutdown: Arc<Notify>) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tracing::info!("Starting Discord bot...");

    tokio::select! {
        result = client.start() => result?,
        _ = shutdown.notified() => {
            tracing::info!("Shutting down all shards");
            shard_manager.shutdown_all().await;
        }
    }

    tracing::info!("Discord bot stopped");
    Ok(())
}
