//! Member join, leave and display name logging.

use chrono::{DateTime, Utc};
use serenity::all::{
    ChannelId, Context, CreateEmbed, CreateMessage, GuildId, GuildMemberUpdateEvent, Member,
    Timestamp, User, UserId,
};
use serenity::model::guild::audit_log::{Action, AuditLogEntry, MemberAction};

use crate::{
    model::{extension::Extension, member::MemberSummary},
    service::member_event::{
        display_name_embed, join_embed, remove_embed, welcome_text, KickRecord, RemovalCause,
    },
    state::AppState,
};

/// Member events are handled for the configured guild with `member_event` loaded.
async fn is_enabled(state: &AppState, guild_id: GuildId) -> bool {
    guild_id.get() == state.config.guild_id
        && state.extensions.is_loaded(Extension::MemberEvent).await
}

fn bot_summary(ctx: &Context) -> MemberSummary {
    MemberSummary::from_user(&ctx.cache.current_user())
}

async fn send_log(state: &AppState, ctx: &Context, embed: CreateEmbed) {
    let channel_id = ChannelId::new(state.config.log_channel_id);
    if let Err(e) = channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::error!("Failed to send log embed to {}: {}", channel_id, e);
    }
}

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, new_member: Member) {
    if !is_enabled(state, new_member.guild_id).await {
        return;
    }

    let assets = state.assets.current().await;
    let messages = &assets.event_messages.join;
    let member = MemberSummary::from_member(&new_member);
    let signer = bot_summary(&ctx);

    tracing::info!("{} ({}) joined the guild", member.username, member.id);

    let embed = join_embed(messages, &member, &signer, Timestamp::now());
    send_log(state, &ctx, embed).await;

    let guild_name = new_member
        .guild_id
        .name(&ctx.cache)
        .unwrap_or_else(|| new_member.guild_id.to_string());
    let welcome_channel = ChannelId::new(state.config.welcome_channel_id);
    if let Err(e) = welcome_channel
        .say(&ctx.http, welcome_text(messages, &member, &guild_name))
        .await
    {
        tracing::error!("Failed to send welcome message to {}: {}", welcome_channel, e);
    }
}

fn kick_record(entry: &AuditLogEntry) -> Option<KickRecord> {
    let created_at = DateTime::<Utc>::from_timestamp(entry.id.created_at().unix_timestamp(), 0)?;

    Some(KickRecord {
        target_id: entry.target_id.map(|id| id.get()),
        moderator_id: entry.user_id.get(),
        reason: entry.reason.clone(),
        created_at,
    })
}

/// Reads the most recent kick from the audit log, `None` when there is none or
/// the audit log is unavailable.
async fn latest_kick(ctx: &Context, guild_id: GuildId) -> Option<KickRecord> {
    let logs = guild_id
        .audit_logs(
            &ctx.http,
            Some(Action::Member(MemberAction::Kick)),
            None,
            None,
            Some(1),
        )
        .await;

    match logs {
        Ok(logs) => logs.entries.first().and_then(kick_record),
        Err(e) => {
            tracing::warn!("Failed to read kick audit log: {}", e);
            None
        }
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
///
/// A kick in the audit log that targets the member moments ago is reported
/// with its reason and signed by the moderator; anything else is a departure.
pub async fn handle_guild_member_removal(
    state: &AppState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    member_data_if_available: Option<Member>,
) {
    if !is_enabled(state, guild_id).await {
        return;
    }

    let member = member_data_if_available
        .as_ref()
        .map(MemberSummary::from_member)
        .unwrap_or_else(|| MemberSummary::from_user(&user));

    let kick = latest_kick(&ctx, guild_id).await;
    let cause = RemovalCause::resolve(member.id, kick.as_ref(), Utc::now());

    let signer = match &cause {
        RemovalCause::Kicked { moderator_id, .. } => {
            match ctx.http.get_user(UserId::new(*moderator_id)).await {
                Ok(moderator) => MemberSummary::from_user(&moderator),
                Err(e) => {
                    tracing::warn!("Failed to fetch moderator {}: {}", moderator_id, e);
                    bot_summary(&ctx)
                }
            }
        }
        RemovalCause::Left => bot_summary(&ctx),
    };

    tracing::info!("{} ({}) removed: {:?}", member.username, member.id, cause);

    let assets = state.assets.current().await;
    let embed = remove_embed(
        &assets.event_messages.remove,
        &member,
        &cause,
        &signer,
        Timestamp::now(),
    );
    send_log(state, &ctx, embed).await;
}

/// Handles the guild_member_update event; only display name changes are logged.
pub async fn handle_guild_member_update(
    state: &AppState,
    ctx: Context,
    old: Option<Member>,
    new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    if !is_enabled(state, event.guild_id).await {
        return;
    }

    // The previous state is only known when the member was cached.
    let (Some(old), Some(new)) = (old, new) else {
        tracing::debug!("Member {} updated without cached state", event.user.id);
        return;
    };

    let before = old.display_name().to_string();
    if before == new.display_name() {
        return;
    }

    let after = MemberSummary::from_member(&new);
    tracing::info!(
        "{} ({}) changed display name from '{}' to '{}'",
        after.username,
        after.id,
        before,
        after.display_name
    );

    let assets = state.assets.current().await;
    let embed = display_name_embed(
        &assets.event_messages.display_name,
        &before,
        &after,
        &bot_summary(&ctx),
        Timestamp::now(),
    );
    send_log(state, &ctx, embed).await;
}
