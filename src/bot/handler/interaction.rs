use serenity::all::{Context, Interaction};

use crate::{bot::command::dispatch, state::AppState};

/// Routes slash commands to the command dispatcher; other interactions are
/// not used by the bot.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    if let Interaction::Command(command) = interaction {
        dispatch(state, &ctx, &command).await;
    }
}
