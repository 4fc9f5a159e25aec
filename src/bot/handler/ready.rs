//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Registers the slash
//! commands in the configured guild so a restart picks up command changes
//! without an explicit `/sync`.

use serenity::all::{Context, GuildId, Ready};

use crate::{bot::command::definitions, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let guild_id = GuildId::new(state.config.guild_id);
    match guild_id.set_commands(&ctx.http, definitions()).await {
        Ok(commands) => tracing::info!(
            "Registered {} commands in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register commands in guild {}: {}", guild_id, e),
    }

    let loaded = state.extensions.loaded().await;
    tracing::info!(
        "Loaded extensions: {}",
        loaded
            .iter()
            .map(|extension| extension.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
}
