use super::*;

/// Tests that a VIP posting without mentions gets an on-send reply.
///
/// Verifies the topic pick comes before the reply pick.
///
/// Expected: reply from the second topic's second reply
#[test]
fn replies_from_random_send_topic() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new(),
        VipTableBuilder::new().vip(
            VipBuilder::new("Boss", VIP_ID)
                .send(100)
                .send_topic("morning", &["good morning"])
                .send_topic("evening", &["good evening", "sleep well"]),
        ),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::new(&[], &[1, 1]);

    let decision = matcher.decide(&message(VIP_ID, "I'm here", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::VipSender, "Boss", "sleep well"));
}

/// Tests that a VIP mentioning someone uses the mentions list instead.
///
/// Expected: reply from the mentions list
#[test]
fn mentioning_vip_uses_mentions_replies() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new(),
        VipTableBuilder::new().vip(VipBuilder::new("Boss", VIP_ID).mentions(100, &["who's that?"])),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(VIP_ID, "hi <@1001>", &[ALICE_ID]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::VipSender, "Boss", "who's that?"));
}

/// Tests that a VIP sender is checked after VIP-mentioned.
///
/// Verifies that when a VIP mentions another VIP, the mentioned VIP's
/// be-mentioned reply wins.
///
/// Expected: VipMentioned reply
#[test]
fn vip_mentioned_takes_priority() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new(),
        VipTableBuilder::new()
            .vip(VipBuilder::new("Boss", VIP_ID).mentions(100, &["sender reply"]))
            .vip(VipBuilder::new("Other", 5000).be_mentioned(100, &["mentioned reply"])),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(VIP_ID, "hi", &[5000]), BOT_ID, &mut rng);

    assert_eq!(
        decision,
        reply(MatchCategory::VipMentioned, "Other", "mentioned reply")
    );
}

/// Tests that a failed on-send roll leaves any-keyword rules to answer.
///
/// Expected: AnyKeywords reply
#[test]
fn failed_send_roll_falls_through() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new().topic("any", &["here"], 100, &["from any"]),
        VipTableBuilder::new().vip(VipBuilder::new("Boss", VIP_ID).send(40).send_topic("t", &["nope"])),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::new(&[41], &[]);

    let decision = matcher.decide(&message(VIP_ID, "I'm here", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::AnyKeywords, "any", "from any"));
}
