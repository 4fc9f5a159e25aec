use crate::{
    data::asset::Assets,
    model::{
        keyword::KeywordTable,
        message::{IncomingMessage, MatchCategory, MatchDecision},
        vip::VipTable,
    },
    service::{matcher::MessageMatcher, random::ScriptedRandom},
};
use test_utils::{
    builder::{KeywordTableBuilder, VipBuilder, VipTableBuilder},
    serenity::{create_test_message, create_test_user},
};

mod all_keywords;
mod any_keywords;
mod ignored;
mod vip_mentioned;
mod vip_sender;

const BOT_ID: u64 = 1;
const CHANNEL_ID: u64 = 2001;
const CONFERENCE_ID: u64 = 2999;
const ALICE_ID: u64 = 1001;
const VIP_ID: u64 = 4242;

fn keyword_table(builder: KeywordTableBuilder) -> KeywordTable {
    serde_json::from_value(builder.build()).unwrap()
}

fn vip_table(builder: VipTableBuilder) -> VipTable {
    serde_json::from_value(builder.build()).unwrap()
}

fn assets(all: KeywordTableBuilder, any: KeywordTableBuilder, vips: VipTableBuilder) -> Assets {
    Assets {
        all_keywords: keyword_table(all),
        any_keywords: keyword_table(any),
        vips: vip_table(vips),
        ..Assets::default()
    }
}

/// Message posted by `author_id` in the regular test channel.
fn message(author_id: u64, content: &str, mentions: &[u64]) -> IncomingMessage {
    message_in(CHANNEL_ID, author_id, content, mentions)
}

fn message_in(channel_id: u64, author_id: u64, content: &str, mentions: &[u64]) -> IncomingMessage {
    let author = create_test_user(author_id, "author");
    let mentioned: Vec<_> = mentions
        .iter()
        .map(|id| create_test_user(*id, "mentioned"))
        .collect();

    IncomingMessage::from_message(&create_test_message(
        1, channel_id, &author, content, &mentioned,
    ))
}

fn reply(category: MatchCategory, topic: &str, text: &str) -> MatchDecision {
    MatchDecision::Reply {
        category,
        topic: topic.to_string(),
        text: text.to_string(),
    }
}
