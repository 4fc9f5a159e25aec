//! User-facing text tables (`bot.json` and `event.json`).
//!
//! Every section falls back to built-in English text for keys the file omits,
//! so a partially translated file still produces complete messages. Patterns use
//! `{placeholder}` substitution, see `util::template::render`.

use serde::Deserialize;

/// Replies sent by the slash commands.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BotMessages {
    pub sync: SyncMessages,
    pub shutdown: ShutdownMessages,
    pub loaded_extensions: LoadedExtensionsMessages,
    pub set_activity: ActivityMessages,
    pub extension: ExtensionMessages,
    pub permission: PermissionMessages,
    pub forward: ForwardMessages,
    pub audit_log: AuditLogMessages,
    pub report: ReportMessages,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SyncMessages {
    pub succeeded: String,
    pub invalid: String,
    pub failed: String,
}

impl Default for SyncMessages {
    fn default() -> Self {
        Self {
            succeeded: "Commands synced.".to_string(),
            invalid: "Invalid option, use `guild` or `global`.".to_string(),
            failed: "Failed to sync commands.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShutdownMessages {
    pub succeeded: String,
}

impl Default for ShutdownMessages {
    fn default() -> Self {
        Self {
            succeeded: "Shutting down.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadedExtensionsMessages {
    pub title: String,
    pub description: String,
    pub name: String,
    pub none: String,
}

impl Default for LoadedExtensionsMessages {
    fn default() -> Self {
        Self {
            title: "Extensions".to_string(),
            description: "Currently loaded extensions".to_string(),
            name: "Loaded".to_string(),
            none: "No extension is loaded.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActivityMessages {
    pub succeeded: String,
    pub invalid: String,
}

impl Default for ActivityMessages {
    fn default() -> Self {
        Self {
            succeeded: "Activity updated.".to_string(),
            invalid: "Unknown activity kind `{kind}`.".to_string(),
        }
    }
}

/// Patterns accept `{extension}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtensionMessages {
    pub loaded: String,
    pub unloaded: String,
    pub reloaded: String,
    pub not_found: String,
    pub already_loaded: String,
    pub not_loaded: String,
    pub reload_failed: String,
    pub disabled: String,
}

impl Default for ExtensionMessages {
    fn default() -> Self {
        Self {
            loaded: "Loaded `{extension}`.".to_string(),
            unloaded: "Unloaded `{extension}`.".to_string(),
            reloaded: "Reloaded `{extension}`.".to_string(),
            not_found: "Extension `{extension}` does not exist.".to_string(),
            already_loaded: "Extension `{extension}` is already loaded.".to_string(),
            not_loaded: "Extension `{extension}` is not loaded.".to_string(),
            reload_failed: "Failed to reload assets, previous configuration kept.".to_string(),
            disabled: "This command is disabled, `{extension}` is not loaded.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PermissionMessages {
    pub missing_role: String,
}

impl Default for PermissionMessages {
    fn default() -> Self {
        Self {
            missing_role: "You do not have permission to use this command.".to_string(),
        }
    }
}

/// `succeeded` accepts `{message}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForwardMessages {
    pub succeeded: String,
    pub failed: String,
}

impl Default for ForwardMessages {
    fn default() -> Self {
        Self {
            succeeded: "Forwarded message: {message}".to_string(),
            failed: "Failed to forward the message.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuditLogMessages {
    pub empty: String,
    pub failed: String,
}

impl Default for AuditLogMessages {
    fn default() -> Self {
        Self {
            empty: "The audit log is empty.".to_string(),
            failed: "Failed to read the audit log.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportMessages {
    pub invalid_kind: String,
}

impl Default for ReportMessages {
    fn default() -> Self {
        Self {
            invalid_kind: "Unknown report `{kind}`, use `profit` or `trends`.".to_string(),
        }
    }
}

/// Texts for member join/leave/update logging.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventMessages {
    pub join: JoinMessages,
    pub remove: RemoveMessages,
    pub display_name: DisplayNameMessages,
}

/// `description` accepts `{mention} {nickname} {username} {id}`,
/// `welcome` accepts `{mention} {guild}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JoinMessages {
    pub title: String,
    pub description: String,
    pub welcome: String,
}

impl Default for JoinMessages {
    fn default() -> Self {
        Self {
            title: "Member joined".to_string(),
            description: "{mention} {nickname} ({username}, {id}) joined the guild".to_string(),
            welcome: "Welcome to {guild}, {mention}!".to_string(),
        }
    }
}

/// `description` accepts `{mention} {nickname} {username} {id} {reason}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoveMessages {
    pub title: String,
    pub description: String,
    pub left_reason: String,
    /// Used when a kick carries no audit log reason.
    pub no_reason: String,
}

impl Default for RemoveMessages {
    fn default() -> Self {
        Self {
            title: "Member removed".to_string(),
            description: "{mention} {nickname} ({username}, {id}) left the guild: {reason}"
                .to_string(),
            left_reason: "left on their own".to_string(),
            no_reason: "kicked without a reason".to_string(),
        }
    }
}

/// `description` accepts `{mention} {nickname_before} {nickname_after} {username} {id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayNameMessages {
    pub title: String,
    pub description: String,
}

impl Default for DisplayNameMessages {
    fn default() -> Self {
        Self {
            title: "Display name changed".to_string(),
            description: "{mention} ({username}, {id}) changed display name from {nickname_before} to {nickname_after}"
                .to_string(),
        }
    }
}
