use serenity::all::{Message, User};

use crate::serenity::user::user_json;

/// Guild every test message is posted in.
pub const TEST_GUILD_ID: u64 = 900;

/// Creates a guild text message.
///
/// # Arguments
/// - `message_id` - Message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author` - Message author
/// - `content` - Message text
/// - `mentions` - Users mentioned in the message, in order
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author: &User,
    content: &str,
    mentions: &[User],
) -> Message {
    let mentions: Vec<serde_json::Value> = mentions
        .iter()
        .map(|user| user_json(user.id.get(), &user.name))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": TEST_GUILD_ID.to_string(),
        "author": user_json(author.id.get(), &author.name),
        "content": content,
        "timestamp": "2024-05-01T12:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": mentions,
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message")
}
