use serenity::all::{Context, GuildId, Reaction, RoleId, UserId};

use crate::{model::extension::Extension, service::reaction_role::role_for_reaction, state::AppState};

/// Whether the member gains or loses the mapped role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleChange {
    Add,
    Remove,
}

pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    apply_reaction_role(state, &ctx, &reaction, RoleChange::Add).await;
}

pub async fn handle_reaction_remove(state: &AppState, ctx: Context, reaction: Reaction) {
    apply_reaction_role(state, &ctx, &reaction, RoleChange::Remove).await;
}

async fn apply_reaction_role(
    state: &AppState,
    ctx: &Context,
    reaction: &Reaction,
    change: RoleChange,
) {
    if reaction.guild_id.map(|id| id.get()) != Some(state.config.guild_id) {
        return;
    }
    let Some(user_id) = reaction.user_id else {
        return;
    };
    let bot_user_id = ctx.cache.current_user().id;
    if user_id == bot_user_id {
        return;
    }
    if !state.extensions.is_loaded(Extension::RoleReaction).await {
        return;
    }

    let assets = state.assets.current().await;
    let Some(role_id) = role_for_reaction(
        &assets.reaction_roles,
        state.config.role_message_id,
        reaction.message_id.get(),
        &reaction.emoji,
    ) else {
        return;
    };

    let guild_id = GuildId::new(state.config.guild_id);
    let role_id = RoleId::new(role_id);
    let result = match change {
        RoleChange::Add => {
            ctx.http
                .add_member_role(guild_id, user_id, role_id, Some("Reaction role"))
                .await
        }
        RoleChange::Remove => {
            ctx.http
                .remove_member_role(guild_id, user_id, role_id, Some("Reaction role"))
                .await
        }
    };

    log_role_change(change, user_id, role_id, result);
}

fn log_role_change(
    change: RoleChange,
    user_id: UserId,
    role_id: RoleId,
    result: serenity::Result<()>,
) {
    match result {
        Ok(()) => tracing::info!("{:?} role {} for user {}", change, role_id, user_id),
        Err(e) => tracing::error!(
            "Failed to {:?} role {} for user {}: {}",
            change,
            role_id,
            user_id,
            e
        ),
    }
}
