use serenity::all::{
    ActivityData, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, OnlineStatus,
};

use crate::{
    bot::command::{options::string_option, response::reply_ephemeral},
    error::AppError,
    model::{
        command::{ActivityChoice, ActivityKind},
        messages::ActivityMessages,
    },
    util::template::render,
};

pub const NAME: &str = "set_activity";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set the bot's activity")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "name",
                "Activity text, or `default` to clear it",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "kind", "Activity type")
                .add_string_choice("playing", "playing")
                .add_string_choice("listening", "listening")
                .add_string_choice("watching", "watching")
                .add_string_choice("competing", "competing")
                .add_string_choice("custom", "custom"),
        )
}

fn activity_data(kind: &ActivityKind, name: &str) -> Option<ActivityData> {
    match kind {
        ActivityKind::Playing => Some(ActivityData::playing(name)),
        ActivityKind::Listening => Some(ActivityData::listening(name)),
        ActivityKind::Watching => Some(ActivityData::watching(name)),
        ActivityKind::Competing => Some(ActivityData::competing(name)),
        ActivityKind::Custom => Some(ActivityData::custom(name)),
        ActivityKind::Unrecognized(_) => None,
    }
}

/// Sets the presence; `default` clears the activity and goes back online.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    messages: &ActivityMessages,
) -> Result<(), AppError> {
    let choice = ActivityChoice::parse(
        string_option(command, "name").unwrap_or_default(),
        string_option(command, "kind"),
    );

    match choice {
        ActivityChoice::Default => {
            ctx.set_presence(None, OnlineStatus::Online);
            tracing::info!("Cleared activity");
        }
        ActivityChoice::Set { kind, name } => {
            let Some(activity) = activity_data(&kind, &name) else {
                let kind = string_option(command, "kind").unwrap_or_default();
                return reply_ephemeral(ctx, command, render(&messages.invalid, &[("kind", kind)]))
                    .await;
            };
            ctx.set_presence(Some(activity), OnlineStatus::DoNotDisturb);
            tracing::info!("Set activity {:?} '{}'", kind, name);
        }
    }

    reply_ephemeral(ctx, command, &messages.succeeded).await
}
