//! Incoming chat messages and auto-reply decisions.

use serenity::all::Message;

/// The parts of a guild message the reply matcher looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author_id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub content: String,
    /// Mentioned users in the order Discord reports them.
    pub mentioned_user_ids: Vec<u64>,
}

impl IncomingMessage {
    /// Converts a serenity message at the handler boundary.
    pub fn from_message(message: &Message) -> Self {
        Self {
            author_id: message.author.id.get(),
            channel_id: message.channel_id.get(),
            guild_id: message.guild_id.map(|id| id.get()),
            content: message.content.clone(),
            mentioned_user_ids: message.mentions.iter().map(|user| user.id.get()).collect(),
        }
    }

    pub fn has_mentions(&self) -> bool {
        !self.mentioned_user_ids.is_empty()
    }
}

/// Rule category that produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCategory {
    AllKeywords,
    VipMentioned,
    VipSender,
    AnyKeywords,
}

/// Outcome of evaluating one message against the reply tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchDecision {
    Reply {
        category: MatchCategory,
        /// Topic (keyword rules) or VIP name that fired.
        topic: String,
        text: String,
    },
    NoReply,
}

#[cfg(test)]
impl MatchDecision {
    pub fn should_reply(&self) -> bool {
        matches!(self, Self::Reply { .. })
    }

    pub fn reply_text(&self) -> Option<&str> {
        match self {
            Self::Reply { text, .. } => Some(text),
            Self::NoReply => None,
        }
    }
}
