//! Runtime-toggleable feature groups.

use std::fmt;
use std::str::FromStr;

use crate::error::extension::ExtensionError;

/// A named group of commands and event handlers that can be loaded and
/// unloaded while the bot is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Extension {
    /// `/audit_log`
    GuildManager,
    /// Join, leave and display-name logging plus welcome messages.
    MemberEvent,
    /// Keyword/VIP auto-replies and `/forward`.
    MessageHandler,
    /// `/report` and the scheduled report.
    ReportManager,
    /// Role assignment through reactions on the role message.
    RoleReaction,
}

impl Extension {
    pub const ALL: [Extension; 5] = [
        Extension::GuildManager,
        Extension::MemberEvent,
        Extension::MessageHandler,
        Extension::ReportManager,
        Extension::RoleReaction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GuildManager => "guild_manager",
            Self::MemberEvent => "member_event",
            Self::MessageHandler => "message_handler",
            Self::ReportManager => "report_manager",
            Self::RoleReaction => "role_reaction",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Extension {
    type Err = ExtensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|extension| extension.name() == name)
            .ok_or(ExtensionError::NotFound(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(
            "Message_Handler".parse::<Extension>(),
            Ok(Extension::MessageHandler)
        );
        assert_eq!(" role_reaction ".parse(), Ok(Extension::RoleReaction));
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(
            "woof".parse::<Extension>(),
            Err(ExtensionError::NotFound("woof".to_string()))
        );
    }

    #[test]
    fn name_round_trips_through_display() {
        for extension in Extension::ALL {
            assert_eq!(extension.to_string().parse::<Extension>(), Ok(extension));
        }
    }
}
