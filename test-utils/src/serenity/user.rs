use serenity::all::User;

/// Creates a test Serenity User without avatar or global name.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Username
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(user_json(user_id, username)).expect("Failed to create test user")
}

/// JSON of a user as Discord sends it, for embedding in other payloads.
pub fn user_json(user_id: u64, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    })
}
