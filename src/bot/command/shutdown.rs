use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::command::response::reply_ephemeral, error::AppError, model::messages::ShutdownMessages,
    state::AppState,
};

pub const NAME: &str = "shutdown";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Disconnect the bot and exit")
}

/// Confirms, then signals the gateway loop to stop.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    messages: &ShutdownMessages,
) -> Result<(), AppError> {
    reply_ephemeral(ctx, command, &messages.succeeded).await?;

    tracing::info!("Shutdown requested by {}", command.user.id);
    state.shutdown.notify_one();

    Ok(())
}
