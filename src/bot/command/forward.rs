use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::command::{options::string_option, response::reply_ephemeral},
    error::AppError,
    model::messages::ForwardMessages,
    util::template::render,
};

pub const NAME: &str = "forward";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Post a message in this channel as the bot")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "message", "Text to post")
                .required(true),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    messages: &ForwardMessages,
) -> Result<(), AppError> {
    let text = string_option(command, "message").unwrap_or_default();

    if let Err(e) = command.channel_id.say(&ctx.http, text).await {
        tracing::error!("Failed to forward message to {}: {}", command.channel_id, e);
        return reply_ephemeral(ctx, command, &messages.failed).await;
    }

    tracing::info!("{} forwarded a message to {}", command.user.id, command.channel_id);
    reply_ephemeral(ctx, command, render(&messages.succeeded, &[("message", text)])).await
}
