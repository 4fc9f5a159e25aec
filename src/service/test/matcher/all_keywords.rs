use super::*;

/// Tests that a message containing every keyword of a rule gets a reply.
///
/// Expected: reply from the matched rule's reply list
#[test]
fn replies_when_all_keywords_present() {
    let assets = assets(
        KeywordTableBuilder::new().topic("greeting", &["hello", "world"], 100, &["hi"]),
        KeywordTableBuilder::new(),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "hello world", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::AllKeywords, "greeting", "hi"));
}

/// Tests that one missing keyword prevents an all-keyword match.
///
/// Expected: NoReply
#[test]
fn requires_every_keyword() {
    let assets = assets(
        KeywordTableBuilder::new().topic("greeting", &["hello", "world"], 100, &["hi"]),
        KeywordTableBuilder::new(),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "hello there", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, MatchDecision::NoReply);
}

/// Tests that keyword matching is case sensitive.
///
/// Expected: NoReply for "Hello World" against "hello" and "world"
#[test]
fn matching_is_case_sensitive() {
    let assets = assets(
        KeywordTableBuilder::new().topic("greeting", &["hello", "world"], 100, &["hi"]),
        KeywordTableBuilder::new(),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "Hello World", &[]), BOT_ID, &mut rng);

    assert!(!decision.should_reply());
}

/// Tests that a failed chance roll moves on to the next rule of the table.
///
/// Verifies the first rule (chance 50) is rolled at 51 and skipped, then the
/// second rule fires.
///
/// Expected: reply from the second rule
#[test]
fn failed_roll_continues_with_next_rule() {
    let assets = assets(
        KeywordTableBuilder::new()
            .topic("first", &["hello"], 50, &["first reply"])
            .topic("second", &["hello"], 100, &["second reply"]),
        KeywordTableBuilder::new(),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::new(&[51, 100], &[]);

    let decision = matcher.decide(&message(ALICE_ID, "hello", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::AllKeywords, "second", "second reply"));
    assert_eq!(rng.rolls_taken, 2);
}

/// Tests that a roll equal to the chance still fires.
///
/// Expected: reply with the picked index
#[test]
fn roll_equal_to_chance_fires() {
    let assets = assets(
        KeywordTableBuilder::new().topic("greeting", &["hello"], 30, &["a", "b", "c"]),
        KeywordTableBuilder::new(),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::new(&[30], &[2]);

    let decision = matcher.decide(&message(ALICE_ID, "hello", &[]), BOT_ID, &mut rng);

    assert_eq!(decision.reply_text(), Some("c"));
}

/// Tests that a chance of zero never fires, whatever the roll.
///
/// Expected: NoReply
#[test]
fn zero_chance_never_fires() {
    let assets = assets(
        KeywordTableBuilder::new().topic("greeting", &["hello"], 0, &["hi"]),
        KeywordTableBuilder::new(),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::new(&[1], &[]);

    let decision = matcher.decide(&message(ALICE_ID, "hello", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, MatchDecision::NoReply);
}

/// Tests that all-keyword rules take priority over any-keyword rules.
///
/// Expected: AllKeywords reply
#[test]
fn takes_priority_over_any_keywords() {
    let assets = assets(
        KeywordTableBuilder::new().topic("all", &["hello", "world"], 100, &["from all"]),
        KeywordTableBuilder::new().topic("any", &["hello"], 100, &["from any"]),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "hello world", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::AllKeywords, "all", "from all"));
}

/// Tests with the thread RNG that the reply always comes from the rule.
///
/// Expected: every decision is one of the configured replies
#[test]
fn reply_is_always_a_configured_reply() {
    use crate::service::random::ThreadRandom;

    let replies = ["one", "two", "three"];
    let assets = assets(
        KeywordTableBuilder::new().topic("greeting", &["hello"], 100, &replies),
        KeywordTableBuilder::new(),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ThreadRandom::default();

    for _ in 0..100 {
        let decision = matcher.decide(&message(ALICE_ID, "hello", &[]), BOT_ID, &mut rng);
        let text = decision.reply_text().unwrap();
        assert!(replies.contains(&text));
    }
}
