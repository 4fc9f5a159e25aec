use serenity::all::ReactionType;

use crate::model::reaction_role::ReactionRoleTable;

/// Name used to look up a reaction in the role table: the custom emoji name
/// or the unicode character itself.
pub fn emoji_name(emoji: &ReactionType) -> Option<&str> {
    match emoji {
        ReactionType::Custom { name, .. } => name.as_deref(),
        ReactionType::Unicode(unicode) => Some(unicode.as_str()),
        _ => None,
    }
}

/// Role granted by a reaction, if any.
///
/// # Arguments
/// - `table` - Emoji to role mapping
/// - `role_message_id` - Configured role message, `None` disables the feature
/// - `message_id` - Message that was reacted to
/// - `emoji` - Reaction emoji
///
/// # Returns
/// - `Some(role_id)` - Reaction on the role message with a mapped emoji
/// - `None` - Any other reaction
pub fn role_for_reaction(
    table: &ReactionRoleTable,
    role_message_id: Option<u64>,
    message_id: u64,
    emoji: &ReactionType,
) -> Option<u64> {
    if role_message_id != Some(message_id) {
        return None;
    }
    table.role_for(emoji_name(emoji)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reaction_role::ReactionRole;
    use serenity::all::EmojiId;

    fn table() -> ReactionRoleTable {
        ReactionRoleTable {
            roles: vec![
                ReactionRole {
                    emoji: "🎮".to_string(),
                    role_id: 10,
                },
                ReactionRole {
                    emoji: "pepe".to_string(),
                    role_id: 20,
                },
            ],
        }
    }

    #[test]
    fn maps_unicode_and_custom_emoji() {
        let custom = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(555),
            name: Some("pepe".to_string()),
        };

        assert_eq!(
            role_for_reaction(&table(), Some(7), 7, &ReactionType::Unicode("🎮".to_string())),
            Some(10)
        );
        assert_eq!(role_for_reaction(&table(), Some(7), 7, &custom), Some(20));
    }

    #[test]
    fn ignores_other_messages_and_unmapped_emoji() {
        let gaming = ReactionType::Unicode("🎮".to_string());

        assert_eq!(role_for_reaction(&table(), Some(7), 8, &gaming), None);
        assert_eq!(role_for_reaction(&table(), None, 7, &gaming), None);
        assert_eq!(
            role_for_reaction(&table(), Some(7), 7, &ReactionType::Unicode("🍕".to_string())),
            None
        );
    }
}
