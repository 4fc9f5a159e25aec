//! Slash commands.
//!
//! Each submodule registers one command (`register`) and handles it (`run`).
//! `dispatch` checks access and the owning extension before running a command,
//! so the individual handlers only deal with their own options.

pub mod activity;
pub mod audit_log;
pub mod extension;
pub mod forward;
pub mod loaded;
pub mod options;
pub mod report;
pub mod response;
pub mod shutdown;
pub mod sync;

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::command::{extension::ExtensionAction, response::reply_ephemeral},
    config::Config,
    model::extension::Extension,
    service::access::CommandAccess,
    state::AppState,
    util::template::render,
};

/// Every command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        sync::register(),
        shutdown::register(),
        loaded::register(),
        activity::register(),
        extension::register_load(),
        extension::register_unload(),
        extension::register_reload(),
        forward::register(),
        audit_log::register(),
        report::register(),
    ]
}

/// Access rule and owning extension of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequirement {
    pub access: CommandAccess,
    /// Extension that must be loaded, `None` for always-available commands.
    pub extension: Option<Extension>,
}

/// Looks up the requirement of a command by name.
pub fn requirement(name: &str, config: &Config) -> Option<CommandRequirement> {
    let admin = config.admin_role_id;
    let tester = config.tester_role_id;

    let (access, extension) = match name {
        sync::NAME | loaded::NAME | activity::NAME => (CommandAccess::Owner, None),
        shutdown::NAME => (CommandAccess::AnyRole(vec![admin]), None),
        extension::LOAD | extension::UNLOAD | extension::RELOAD => {
            (CommandAccess::AnyRole(vec![admin, tester]), None)
        }
        forward::NAME => (
            CommandAccess::AnyRole(vec![admin]),
            Some(Extension::MessageHandler),
        ),
        audit_log::NAME => (
            CommandAccess::AnyRole(vec![admin, tester]),
            Some(Extension::GuildManager),
        ),
        report::NAME => (
            CommandAccess::AnyRole(vec![config.report_role_id]),
            Some(Extension::ReportManager),
        ),
        _ => return None,
    };

    Some(CommandRequirement { access, extension })
}

/// Runs a slash command after checking access and its extension.
///
/// Errors are logged; the user already got a response or the interaction
/// could not be answered at all.
pub async fn dispatch(state: &AppState, ctx: &Context, command: &CommandInteraction) {
    let name = command.data.name.as_str();
    let assets = state.assets.current().await;
    let messages = &assets.bot_messages;

    let Some(requirement) = requirement(name, &state.config) else {
        tracing::warn!("Received unknown command /{}", name);
        return;
    };

    let user_id = command.user.id.get();
    let member_roles: Vec<u64> = command
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    if !requirement
        .access
        .allows(user_id, &member_roles, state.owner_id)
    {
        tracing::info!("Denied /{} to {} ({})", name, command.user.name, user_id);
        if let Err(e) = reply_ephemeral(ctx, command, &messages.permission.missing_role).await {
            tracing::error!("Failed to answer /{}: {}", name, e);
        }
        return;
    }

    if let Some(extension) = requirement.extension {
        if !state.extensions.is_loaded(extension).await {
            let text = render(
                &messages.extension.disabled,
                &[("extension", extension.name())],
            );
            if let Err(e) = reply_ephemeral(ctx, command, text).await {
                tracing::error!("Failed to answer /{}: {}", name, e);
            }
            return;
        }
    }

    tracing::info!("{} ({}) invoked /{}", command.user.name, user_id, name);

    let result = match name {
        sync::NAME => sync::run(state, ctx, command, &messages.sync).await,
        shutdown::NAME => shutdown::run(state, ctx, command, &messages.shutdown).await,
        loaded::NAME => loaded::run(state, ctx, command, &messages.loaded_extensions).await,
        activity::NAME => activity::run(ctx, command, &messages.set_activity).await,
        forward::NAME => forward::run(ctx, command, &messages.forward).await,
        audit_log::NAME => audit_log::run(state, ctx, command, &messages.audit_log).await,
        report::NAME => report::run(state, ctx, command, &assets).await,
        other => match ExtensionAction::from_command(other) {
            Some(action) => {
                extension::run(state, ctx, command, action, &messages.extension).await
            }
            None => Ok(()),
        },
    };

    if let Err(e) = result {
        tracing::error!("Command /{} failed: {}", name, e);
    }
}
