/// Who may invoke a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAccess {
    /// Only the bot owner.
    Owner,
    /// Members holding at least one of the roles.
    AnyRole(Vec<u64>),
}

impl CommandAccess {
    /// Checks an invocation against the requirement.
    ///
    /// # Arguments
    /// - `user_id` - Invoking user
    /// - `member_roles` - Role ids of the invoking member, empty outside a guild
    /// - `owner_id` - Resolved bot owner, `None` when it could not be determined
    pub fn allows(&self, user_id: u64, member_roles: &[u64], owner_id: Option<u64>) -> bool {
        match self {
            Self::Owner => owner_id == Some(user_id),
            Self::AnyRole(roles) => roles.iter().any(|role| member_roles.contains(role)),
        }
    }
}
