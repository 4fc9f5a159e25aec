//! Log embeds and texts for member join, leave and display name changes.

use chrono::{DateTime, Duration, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    model::{
        member::MemberSummary,
        messages::{DisplayNameMessages, JoinMessages, RemoveMessages},
    },
    util::template::render,
};

const JOIN_COLOR: u32 = 0x2ecc71;
const REMOVE_COLOR: u32 = 0xe74c3c;
const UPDATE_COLOR: u32 = 0x3498db;

/// A kick audit entry older than this is not attributed to a departure.
const KICK_MATCH_WINDOW_SECS: i64 = 60;

/// The latest kick recorded in the guild audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KickRecord {
    pub target_id: Option<u64>,
    pub moderator_id: u64,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Why a member is no longer in the guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalCause {
    Left,
    Kicked {
        moderator_id: u64,
        reason: Option<String>,
    },
}

impl RemovalCause {
    /// Attributes a departure to the latest kick when it targets the member
    /// and happened moments before `now`.
    pub fn resolve(member_id: u64, latest_kick: Option<&KickRecord>, now: DateTime<Utc>) -> Self {
        match latest_kick {
            Some(kick)
                if kick.target_id == Some(member_id)
                    && now.signed_duration_since(kick.created_at)
                        <= Duration::seconds(KICK_MATCH_WINDOW_SECS) =>
            {
                Self::Kicked {
                    moderator_id: kick.moderator_id,
                    reason: kick.reason.clone(),
                }
            }
            _ => Self::Left,
        }
    }

    pub fn reason_text(&self, messages: &RemoveMessages) -> String {
        match self {
            Self::Left => messages.left_reason.clone(),
            Self::Kicked { reason: Some(reason), .. } => reason.clone(),
            Self::Kicked { reason: None, .. } => messages.no_reason.clone(),
        }
    }
}

fn member_values<'a>(member: &'a MemberSummary, id: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("mention", member.mention.as_str()),
        ("nickname", member.display_name.as_str()),
        ("username", member.username.as_str()),
        ("id", id),
    ]
}

fn signed_embed(
    title: &str,
    description: String,
    color: u32,
    signer: &MemberSummary,
    now: Timestamp,
) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(color)
        .footer(CreateEmbedFooter::new(&signer.display_name).icon_url(&signer.avatar_url))
        .timestamp(now)
}

/// Log embed for a member who just joined.
///
/// # Arguments
/// - `messages` - Join texts of the guild language
/// - `member` - The new member
/// - `signer` - User shown in the footer, the bot itself
/// - `now` - Embed timestamp
pub fn join_embed(
    messages: &JoinMessages,
    member: &MemberSummary,
    signer: &MemberSummary,
    now: Timestamp,
) -> CreateEmbed {
    let id = member.id.to_string();
    let description = render(&messages.description, &member_values(member, &id));
    signed_embed(&messages.title, description, JOIN_COLOR, signer, now)
        .thumbnail(&member.avatar_url)
}

pub fn welcome_text(messages: &JoinMessages, member: &MemberSummary, guild_name: &str) -> String {
    render(
        &messages.welcome,
        &[("mention", member.mention.as_str()), ("guild", guild_name)],
    )
}

/// Log embed for a member who left or was kicked.
///
/// `signer` is the moderator for kicks and the bot otherwise.
pub fn remove_embed(
    messages: &RemoveMessages,
    member: &MemberSummary,
    cause: &RemovalCause,
    signer: &MemberSummary,
    now: Timestamp,
) -> CreateEmbed {
    let id = member.id.to_string();
    let reason = cause.reason_text(messages);
    let mut values = member_values(member, &id);
    values.push(("reason", reason.as_str()));

    let description = render(&messages.description, &values);
    signed_embed(&messages.title, description, REMOVE_COLOR, signer, now)
        .thumbnail(&member.avatar_url)
}

pub fn display_name_embed(
    messages: &DisplayNameMessages,
    before: &str,
    after: &MemberSummary,
    signer: &MemberSummary,
    now: Timestamp,
) -> CreateEmbed {
    let id = after.id.to_string();
    let mut values = member_values(after, &id);
    values.push(("nickname_before", before));
    values.push(("nickname_after", after.display_name.as_str()));

    let description = render(&messages.description, &values);
    signed_embed(&messages.title, description, UPDATE_COLOR, signer, now)
}
