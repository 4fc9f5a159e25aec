use serenity::all::{
    AuditLogEntry, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponseFollowup, EditInteractionResponse, GuildId,
};

use crate::{
    bot::command::options::integer_option, error::AppError, model::messages::AuditLogMessages,
    state::AppState,
};

pub const NAME: &str = "audit_log";

const MAX_ENTRIES: u8 = 100;
/// Discord's message length limit.
const MESSAGE_LIMIT: usize = 2000;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the latest audit log entries")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "number", "How many entries")
                .min_int_value(1)
                .max_int_value(100)
                .required(true),
        )
}

fn describe_entry(entry: &AuditLogEntry) -> String {
    let target = entry
        .target_id
        .map(|id| id.get().to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "<t:{}:f> <@{}> {:?} target {} reason: {}",
        entry.id.created_at().unix_timestamp(),
        entry.user_id,
        entry.action,
        target,
        entry.reason.as_deref().unwrap_or("-")
    )
}

/// Joins lines into messages no longer than `limit` characters.
///
/// A single line longer than `limit` is cut at the limit.
pub fn chunk_lines(lines: &[String], limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in lines {
        let line: String = line.chars().take(limit).collect();
        let needed = if current.is_empty() { 0 } else { 1 } + line.chars().count();

        if !current.is_empty() && current.chars().count() + needed > limit {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(&line);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Lists the latest `number` entries of the guild audit log.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    messages: &AuditLogMessages,
) -> Result<(), AppError> {
    let number = integer_option(command, "number")
        .unwrap_or(1)
        .clamp(1, i64::from(MAX_ENTRIES)) as u8;

    command.defer_ephemeral(&ctx.http).await?;

    let logs = match GuildId::new(state.config.guild_id)
        .audit_logs(&ctx.http, None, None, None, Some(number))
        .await
    {
        Ok(logs) => logs,
        Err(e) => {
            tracing::error!("Failed to read audit log: {}", e);
            command
                .edit_response(&ctx.http, EditInteractionResponse::new().content(&messages.failed))
                .await?;
            return Ok(());
        }
    };

    let lines: Vec<String> = logs.entries.iter().map(describe_entry).collect();
    let mut chunks = chunk_lines(&lines, MESSAGE_LIMIT).into_iter();

    let first = chunks.next().unwrap_or_else(|| messages.empty.clone());
    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(first))
        .await?;

    for chunk in chunks {
        command
            .create_followup(
                &ctx.http,
                CreateInteractionResponseFollowup::new()
                    .content(chunk)
                    .ephemeral(true),
            )
            .await?;
    }

    Ok(())
}
