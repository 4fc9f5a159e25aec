use serenity::all::{
    Command, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    GuildId,
};

use crate::{
    bot::command::{definitions, options::string_option, response::reply_ephemeral},
    error::AppError,
    model::{command::SyncScope, messages::SyncMessages},
    state::AppState,
};

pub const NAME: &str = "sync";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Register the slash commands with Discord")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "scope",
                "guild (g, .) or global (gl, ..)",
            )
            .required(true),
        )
}

/// Re-registers the command set in this guild or globally.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    messages: &SyncMessages,
) -> Result<(), AppError> {
    let scope = SyncScope::parse(string_option(command, "scope").unwrap_or_default());

    let result = match &scope {
        SyncScope::Guild => GuildId::new(state.config.guild_id)
            .set_commands(&ctx.http, definitions())
            .await
            .map(|commands| commands.len()),
        SyncScope::Global => Command::set_global_commands(&ctx.http, definitions())
            .await
            .map(|commands| commands.len()),
        SyncScope::Unrecognized(option) => {
            tracing::info!("Ignoring /sync with invalid scope '{}'", option);
            return reply_ephemeral(ctx, command, &messages.invalid).await;
        }
    };

    match result {
        Ok(count) => {
            tracing::info!("Synced {} commands ({:?})", count, scope);
            reply_ephemeral(ctx, command, &messages.succeeded).await
        }
        Err(e) => {
            tracing::error!("Failed to sync commands ({:?}): {}", scope, e);
            reply_ephemeral(ctx, command, &messages.failed).await
        }
    }
}
