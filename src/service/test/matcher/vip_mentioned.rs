use super::*;

/// Tests that mentioning a VIP replies from its be-mentioned list.
///
/// Expected: VipMentioned reply
#[test]
fn replies_when_vip_is_mentioned() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new(),
        VipTableBuilder::new()
            .vip(VipBuilder::new("Boss", VIP_ID).be_mentioned(100, &["the boss is busy"])),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(
        &message(ALICE_ID, "hey <@4242>", &[VIP_ID]),
        BOT_ID,
        &mut rng,
    );

    assert_eq!(
        decision,
        reply(MatchCategory::VipMentioned, "Boss", "the boss is busy")
    );
}

/// Tests that the first VIP in table order wins when several are mentioned.
///
/// Expected: reply from the VIP listed first in the table
#[test]
fn first_vip_in_table_order_wins() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new(),
        VipTableBuilder::new()
            .vip(VipBuilder::new("First", 10).be_mentioned(100, &["first"]))
            .vip(VipBuilder::new("Second", 20).be_mentioned(100, &["second"])),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "hi both", &[20, 10]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::VipMentioned, "First", "first"));
}

/// Tests that mentioning only non-VIP users skips the category.
///
/// Expected: NoReply
#[test]
fn non_vip_mentions_do_not_reply() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new(),
        VipTableBuilder::new().vip(VipBuilder::new("Boss", VIP_ID)),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "hi bob", &[77]), BOT_ID, &mut rng);

    assert_eq!(decision, MatchDecision::NoReply);
}

/// Tests that a failed be-mentioned roll falls through to any-keyword rules.
///
/// Expected: AnyKeywords reply
#[test]
fn failed_roll_falls_through() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new().topic("any", &["hey"], 100, &["from any"]),
        VipTableBuilder::new().vip(VipBuilder::new("Boss", VIP_ID).be_mentioned(20, &["busy"])),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::new(&[80], &[]);

    let decision = matcher.decide(&message(ALICE_ID, "hey", &[VIP_ID]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::AnyKeywords, "any", "from any"));
}
