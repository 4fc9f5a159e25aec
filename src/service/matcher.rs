use crate::{
    data::asset::Assets,
    model::{
        keyword::{ChancePercent, KeywordTable, MatchMode},
        message::{IncomingMessage, MatchCategory, MatchDecision},
        vip::VipTable,
    },
    service::random::RandomSource,
};

/// Content prefixes that never trigger a reply (emotes and links).
const IGNORED_PREFIXES: [&str; 4] = ["<:", "<a:", "https://", "http://"];

/// Decides whether and how to auto-reply to a guild message.
///
/// Borrows the reply tables from an asset snapshot; build one per message.
pub struct MessageMatcher<'a> {
    all_keywords: &'a KeywordTable,
    any_keywords: &'a KeywordTable,
    vips: &'a VipTable,
    conference_channel_id: Option<u64>,
}

impl<'a> MessageMatcher<'a> {
    /// Creates a matcher over the reply tables of `assets`.
    ///
    /// # Arguments
    /// - `assets` - Current asset snapshot
    /// - `conference_channel_id` - Channel in which the bot stays silent
    pub fn new(assets: &'a Assets, conference_channel_id: Option<u64>) -> Self {
        Self {
            all_keywords: &assets.all_keywords,
            any_keywords: &assets.any_keywords,
            vips: &assets.vips,
            conference_channel_id,
        }
    }

    /// Returns true for messages that are never answered: the bot's own
    /// messages, emote or link posts, and anything in the conference channel.
    pub fn is_ignored(&self, message: &IncomingMessage, bot_user_id: u64) -> bool {
        message.author_id == bot_user_id
            || IGNORED_PREFIXES
                .iter()
                .any(|prefix| message.content.starts_with(prefix))
            || self.conference_channel_id == Some(message.channel_id)
    }

    /// Evaluates the rule categories in priority order.
    ///
    /// All-keyword rules first, then VIPs being mentioned, then VIP senders,
    /// then any-keyword rules. The first category that matches and passes its
    /// chance roll produces the reply; a failed roll moves on.
    ///
    /// # Arguments
    /// - `message` - The incoming message
    /// - `bot_user_id` - The bot's own user id
    /// - `rng` - Source of chance rolls and reply picks
    ///
    /// # Returns
    /// - `MatchDecision::Reply` - Category, topic and reply text
    /// - `MatchDecision::NoReply` - Nothing matched or every roll failed
    pub fn decide<R: RandomSource + ?Sized>(
        &self,
        message: &IncomingMessage,
        bot_user_id: u64,
        rng: &mut R,
    ) -> MatchDecision {
        if self.is_ignored(message, bot_user_id) {
            tracing::debug!("Ignoring message from {}", message.author_id);
            return MatchDecision::NoReply;
        }

        if let Some(decision) = check_keywords(
            self.all_keywords,
            MatchMode::All,
            MatchCategory::AllKeywords,
            &message.content,
            rng,
        ) {
            return decision;
        }

        if let Some(decision) = self.check_vip_mentioned(message, rng) {
            return decision;
        }

        if let Some(decision) = self.check_vip_sender(message, rng) {
            return decision;
        }

        check_keywords(
            self.any_keywords,
            MatchMode::Any,
            MatchCategory::AnyKeywords,
            &message.content,
            rng,
        )
        .unwrap_or(MatchDecision::NoReply)
    }

    fn check_vip_mentioned<R: RandomSource + ?Sized>(
        &self,
        message: &IncomingMessage,
        rng: &mut R,
    ) -> Option<MatchDecision> {
        if !message.has_mentions() {
            return None;
        }

        let vip = self
            .vips
            .vips
            .iter()
            .find(|vip| message.mentioned_user_ids.contains(&vip.user_id))?;
        tracing::debug!("VIP {} was mentioned", vip.name);

        if !passes(vip.be_mentioned.chance, rng) {
            return None;
        }

        pick(&vip.be_mentioned.replies, rng).map(|text| MatchDecision::Reply {
            category: MatchCategory::VipMentioned,
            topic: vip.name.clone(),
            text,
        })
    }

    fn check_vip_sender<R: RandomSource + ?Sized>(
        &self,
        message: &IncomingMessage,
        rng: &mut R,
    ) -> Option<MatchDecision> {
        let vip = self.vips.find(message.author_id)?;

        let text = if message.has_mentions() {
            tracing::debug!("VIP {} mentioned someone", vip.name);
            if !passes(vip.mentions.chance, rng) {
                return None;
            }
            pick(&vip.mentions.replies, rng)?
        } else {
            tracing::debug!("VIP {} sent a message", vip.name);
            if !passes(vip.send.chance, rng) {
                return None;
            }
            let topic = vip.send.topics.get(rng.pick_index(vip.send.topics.len()))?;
            pick(&topic.replies, rng)?
        };

        Some(MatchDecision::Reply {
            category: MatchCategory::VipSender,
            topic: vip.name.clone(),
            text,
        })
    }
}

fn check_keywords<R: RandomSource + ?Sized>(
    table: &KeywordTable,
    mode: MatchMode,
    category: MatchCategory,
    content: &str,
    rng: &mut R,
) -> Option<MatchDecision> {
    for rule in &table.topics {
        if !rule.matches(content, mode) {
            continue;
        }
        tracing::debug!("Matched {:?} topic {}", category, rule.topic);

        if !passes(rule.chance, rng) {
            continue;
        }

        if let Some(text) = pick(&rule.replies, rng) {
            return Some(MatchDecision::Reply {
                category,
                topic: rule.topic.clone(),
                text,
            });
        }
    }

    None
}

fn passes<R: RandomSource + ?Sized>(chance: ChancePercent, rng: &mut R) -> bool {
    rng.roll_percent() <= chance.get()
}

fn pick<R: RandomSource + ?Sized>(replies: &[String], rng: &mut R) -> Option<String> {
    replies.get(rng.pick_index(replies.len())).cloned()
}
