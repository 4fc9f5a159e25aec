use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::command::response::reply_embed, error::AppError,
    model::messages::LoadedExtensionsMessages, state::AppState,
};

pub const NAME: &str = "loaded_extensions";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("List the loaded extensions")
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    messages: &LoadedExtensionsMessages,
) -> Result<(), AppError> {
    let loaded = state.extensions.loaded().await;

    let value = if loaded.is_empty() {
        messages.none.clone()
    } else {
        loaded
            .iter()
            .map(|extension| format!("`{}`", extension))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let embed = CreateEmbed::new()
        .title(&messages.title)
        .description(&messages.description)
        .field(&messages.name, value, false);

    reply_embed(ctx, command, embed, true).await
}
