use serenity::all::{Member, User};

/// Display details of a guild member or user used in log embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSummary {
    pub id: u64,
    pub mention: String,
    /// Guild nickname, global name or username, in that order of preference.
    pub display_name: String,
    pub username: String,
    /// Avatar URL, or the default avatar when the user has none.
    pub avatar_url: String,
}

impl MemberSummary {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.get(),
            mention: format!("<@{}>", user.id.get()),
            display_name: user.display_name().to_string(),
            username: user.name.clone(),
            avatar_url: user.face(),
        }
    }

    pub fn from_member(member: &Member) -> Self {
        Self {
            display_name: member.display_name().to_string(),
            ..Self::from_user(&member.user)
        }
    }
}
