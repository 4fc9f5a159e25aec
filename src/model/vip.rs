//! VIP reply profiles (`vip.json`).

use std::collections::HashSet;

use serde::Deserialize;

use crate::{error::config::ConfigError, model::keyword::ChancePercent};

/// A chance gate paired with the replies it can produce.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChanceReplies {
    pub chance: ChancePercent,
    pub replies: Vec<String>,
}

/// A named group of replies a VIP can receive when they post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplyTopic {
    pub topic: String,
    pub replies: Vec<String>,
}

/// Rule applied when a VIP sends a message without mentions.
///
/// One chance roll, then a uniformly random topic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendRule {
    pub chance: ChancePercent,
    pub topics: Vec<ReplyTopic>,
}

/// A configured user with bespoke auto-reply behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VipProfile {
    pub name: String,
    #[serde(rename = "id")]
    pub user_id: u64,
    /// VIP posts a message without mentioning anyone.
    pub send: SendRule,
    /// VIP posts a message that mentions someone.
    pub mentions: ChanceReplies,
    /// Someone else mentions the VIP.
    pub be_mentioned: ChanceReplies,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VipTable {
    #[serde(default)]
    pub vips: Vec<VipProfile>,
}

impl VipTable {
    pub fn find(&self, user_id: u64) -> Option<&VipProfile> {
        self.vips.iter().find(|vip| vip.user_id == user_id)
    }

    /// Checks id uniqueness and that every rule has something to reply with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for vip in &self.vips {
            let invalid = |reason: String| ConfigError::InvalidTable {
                table: "vip",
                reason,
            };

            if !seen.insert(vip.user_id) {
                return Err(invalid(format!("duplicate VIP id {}", vip.user_id)));
            }
            if vip.mentions.replies.is_empty() || vip.be_mentioned.replies.is_empty() {
                return Err(invalid(format!("VIP '{}' has an empty reply list", vip.name)));
            }
            if vip.send.topics.is_empty() {
                return Err(invalid(format!("VIP '{}' has no on-send topics", vip.name)));
            }
            if let Some(topic) = vip.send.topics.iter().find(|t| t.replies.is_empty()) {
                return Err(invalid(format!(
                    "VIP '{}' topic '{}' has no replies",
                    vip.name, topic.topic
                )));
            }
        }

        Ok(())
    }
}
