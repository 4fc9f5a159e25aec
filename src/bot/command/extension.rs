use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::command::{options::string_option, response::reply_ephemeral},
    error::extension::ExtensionError,
    error::AppError,
    model::{command::ExtensionTarget, extension::Extension, messages::ExtensionMessages},
    state::AppState,
    util::template::render,
};

pub const LOAD: &str = "load";
pub const UNLOAD: &str = "unload";
pub const RELOAD: &str = "reload";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionAction {
    Load,
    Unload,
    Reload,
}

impl ExtensionAction {
    pub fn from_command(name: &str) -> Option<Self> {
        match name {
            LOAD => Some(Self::Load),
            UNLOAD => Some(Self::Unload),
            RELOAD => Some(Self::Reload),
            _ => None,
        }
    }
}

fn register(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name).description(description).add_option(
        CreateCommandOption::new(
            CommandOptionType::String,
            "extension",
            "Extension name, or `all`",
        )
        .required(true),
    )
}

pub fn register_load() -> CreateCommand {
    register(LOAD, "Load an extension")
}

pub fn register_unload() -> CreateCommand {
    register(UNLOAD, "Unload an extension")
}

pub fn register_reload() -> CreateCommand {
    register(RELOAD, "Reload an extension and its configuration files")
}

/// Applies `action` to the requested extensions and reports one line per
/// extension. A reload re-reads the asset files once, after the registry
/// checks.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    action: ExtensionAction,
    messages: &ExtensionMessages,
) -> Result<(), AppError> {
    let target = ExtensionTarget::parse(string_option(command, "extension").unwrap_or_default());
    if let ExtensionTarget::Unknown(name) = &target {
        let error = ExtensionError::NotFound(name.clone());
        return reply_ephemeral(ctx, command, describe_error(&error, messages)).await;
    }

    let mut lines = Vec::new();
    let mut reloaded = false;

    for extension in target.extensions() {
        let result = match action {
            ExtensionAction::Load => state.extensions.load(extension).await,
            ExtensionAction::Unload => state.extensions.unload(extension).await,
            ExtensionAction::Reload => state.extensions.reload(extension).await,
        };

        match result {
            Ok(()) => {
                reloaded |= action == ExtensionAction::Reload;
                lines.push(describe_success(action, extension, messages));
            }
            Err(e) => lines.push(describe_error(&e, messages)),
        }
    }

    if reloaded {
        if let Err(e) = state.assets.reload().await {
            tracing::error!("Failed to reload assets: {}", e);
            lines.push(messages.reload_failed.clone());
        }
    }

    reply_ephemeral(ctx, command, lines.join("\n")).await
}

fn describe_success(
    action: ExtensionAction,
    extension: Extension,
    messages: &ExtensionMessages,
) -> String {
    let pattern = match action {
        ExtensionAction::Load => &messages.loaded,
        ExtensionAction::Unload => &messages.unloaded,
        ExtensionAction::Reload => &messages.reloaded,
    };
    render(pattern, &[("extension", extension.name())])
}

pub fn describe_error(error: &ExtensionError, messages: &ExtensionMessages) -> String {
    match error {
        ExtensionError::NotFound(name) => {
            render(&messages.not_found, &[("extension", name.as_str())])
        }
        ExtensionError::AlreadyLoaded(extension) => {
            render(&messages.already_loaded, &[("extension", extension.name())])
        }
        ExtensionError::NotLoaded(extension) => {
            render(&messages.not_loaded, &[("extension", extension.name())])
        }
    }
}
