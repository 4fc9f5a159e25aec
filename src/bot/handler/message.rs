use serenity::all::{Context, Message};

use crate::{
    model::{
        extension::Extension,
        message::{IncomingMessage, MatchDecision},
    },
    service::{matcher::MessageMatcher, random::ThreadRandom},
    state::AppState,
};

/// Handles a guild message: logs it and sends an auto-reply when a keyword or
/// VIP rule fires.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.guild_id.map(|id| id.get()) != Some(state.config.guild_id) {
        return;
    }

    tracing::info!(
        "[{}] #{} {}: {}",
        state.config.guild_id,
        message.channel_id,
        message.author.name,
        message.content
    );

    if !state.extensions.is_loaded(Extension::MessageHandler).await {
        return;
    }

    let assets = state.assets.current().await;
    let bot_user_id = ctx.cache.current_user().id.get();
    let incoming = IncomingMessage::from_message(&message);

    let decision = {
        let mut rng = ThreadRandom::default();
        MessageMatcher::new(&assets, state.config.conference_channel_id).decide(
            &incoming,
            bot_user_id,
            &mut rng,
        )
    };

    let MatchDecision::Reply {
        category,
        topic,
        text,
    } = decision
    else {
        return;
    };

    tracing::info!(
        "Replying to {} in #{} ({:?} '{}')",
        message.author.name,
        message.channel_id,
        category,
        topic
    );

    if let Err(e) = message.channel_id.say(&ctx.http, text).await {
        tracing::error!("Failed to send reply in {}: {}", message.channel_id, e);
    }
}
