//! Emoji to role mapping for the reaction-role message.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReactionRole {
    /// Emoji name as Discord reports it (custom emoji name or the unicode character).
    pub emoji: String,
    pub role_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReactionRoleTable {
    #[serde(default)]
    pub roles: Vec<ReactionRole>,
}

impl ReactionRoleTable {
    pub fn role_for(&self, emoji: &str) -> Option<u64> {
        self.roles
            .iter()
            .find(|mapping| mapping.emoji == emoji)
            .map(|mapping| mapping.role_id)
    }
}
