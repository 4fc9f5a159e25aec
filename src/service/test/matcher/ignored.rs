use super::*;

fn greeting_assets() -> Assets {
    assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new().topic("greeting", &["hello", "https", ":wave:"], 100, &["hi"]),
        VipTableBuilder::new(),
    )
}

/// Tests that the bot never answers its own messages.
///
/// Expected: NoReply without rolling
#[test]
fn ignores_own_messages() {
    let assets = greeting_assets();
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(BOT_ID, "hello", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, MatchDecision::NoReply);
    assert_eq!(rng.rolls_taken, 0);
}

/// Tests that emote-only and link posts are skipped.
///
/// Expected: NoReply for each ignored prefix
#[test]
fn ignores_emotes_and_links() {
    let assets = greeting_assets();
    let matcher = MessageMatcher::new(&assets, None);

    for content in [
        "<:wave:123> hello",
        "<a:wave:123> hello",
        "https://example.com hello",
        "http://example.com hello",
    ] {
        let mut rng = ScriptedRandom::default();
        let decision = matcher.decide(&message(ALICE_ID, content, &[]), BOT_ID, &mut rng);
        assert_eq!(decision, MatchDecision::NoReply, "content: {}", content);
    }
}

/// Tests that a link later in the message does not suppress the reply.
///
/// Expected: reply
#[test]
fn link_after_text_still_replies() {
    let assets = greeting_assets();
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(
        &message(ALICE_ID, "hello https://example.com", &[]),
        BOT_ID,
        &mut rng,
    );

    assert!(decision.should_reply());
}

/// Tests that the conference channel is silent.
///
/// Expected: NoReply in the conference channel, reply elsewhere
#[test]
fn ignores_conference_channel() {
    let assets = greeting_assets();
    let matcher = MessageMatcher::new(&assets, Some(CONFERENCE_ID));
    let mut rng = ScriptedRandom::default();

    let in_conference = message_in(CONFERENCE_ID, ALICE_ID, "hello", &[]);
    let elsewhere = message(ALICE_ID, "hello", &[]);

    assert!(matcher.is_ignored(&in_conference, BOT_ID));
    assert_eq!(matcher.decide(&in_conference, BOT_ID, &mut rng), MatchDecision::NoReply);
    assert!(matcher.decide(&elsewhere, BOT_ID, &mut rng).should_reply());
}
