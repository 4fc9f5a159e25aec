use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};

use crate::{
    bot::command::{
        options::{integer_option, string_option},
        response::reply_ephemeral,
    },
    data::asset::Assets,
    error::AppError,
    model::report::{ReportFilter, ReportKindOption},
    service::report::{builder::build_report_embed, ReportService},
    state::AppState,
    util::template::render,
};

pub const NAME: &str = "report";

/// Filter text is echoed in the embed title, which Discord caps at 256 characters.
const MAX_FILTER_LENGTH: u16 = 100;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the latest market report")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "kind", "profit or trends")
                .add_string_choice("profit", "profit")
                .add_string_choice("trends", "trends")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "category",
                "Only items of this category",
            )
            .max_length(MAX_FILTER_LENGTH),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "name",
                "Only items whose name contains this text",
            )
            .max_length(MAX_FILTER_LENGTH),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "enhance", "Enhancement level")
                .min_int_value(0)
                .max_int_value(10),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "period", "Period in days")
                .min_int_value(1)
                .max_int_value(365),
        )
}

fn filter_from_options(command: &CommandInteraction) -> ReportFilter {
    ReportFilter {
        category: string_option(command, "category").map(str::to_string),
        name: string_option(command, "name").map(str::to_string),
        enhance: integer_option(command, "enhance"),
        period_days: integer_option(command, "period").and_then(|days| u32::try_from(days).ok()),
    }
}

/// Fetches and shows a report.
///
/// The interaction is deferred while the API is queried; failures replace the
/// deferred response with the error text.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    assets: &Assets,
) -> Result<(), AppError> {
    let option = string_option(command, "kind").unwrap_or_default();
    let kind = match ReportKindOption::parse(option) {
        ReportKindOption::Kind(kind) => kind,
        ReportKindOption::Unrecognized(kind) => {
            let text = render(
                &assets.bot_messages.report.invalid_kind,
                &[("kind", kind.as_str())],
            );
            return reply_ephemeral(ctx, command, text).await;
        }
    };
    let filter = filter_from_options(command);
    let icon_url = ctx.cache.current_user().face();

    command.defer(&ctx.http).await?;

    let service = ReportService::new(&state.report_client, &assets.report_templates);
    let embed = service
        .generate(kind, &filter, &icon_url)
        .await
        .map_err(AppError::from)
        .and_then(|report| build_report_embed(&report));

    let response = match embed {
        Ok(embed) => EditInteractionResponse::new().embed(embed),
        Err(e) => {
            tracing::error!("Failed to generate {} report: {}", kind.path(), e);
            EditInteractionResponse::new().content(e.to_string())
        }
    };

    command.edit_response(&ctx.http, response).await?;

    Ok(())
}
