use super::*;

/// Tests that a single keyword is enough for an any-keyword rule.
///
/// Expected: AnyKeywords reply
#[test]
fn replies_when_one_keyword_present() {
    let assets = assets(
        KeywordTableBuilder::new(),
        KeywordTableBuilder::new().topic("food", &["pizza", "sushi"], 100, &["yum"]),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "who wants sushi", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::AnyKeywords, "food", "yum"));
}

/// Tests that nothing matching any table produces no reply.
///
/// Expected: NoReply
#[test]
fn no_rule_matches() {
    let assets = assets(
        KeywordTableBuilder::new().topic("greeting", &["hello", "world"], 100, &["hi"]),
        KeywordTableBuilder::new().topic("food", &["pizza"], 100, &["yum"]),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "nothing here", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, MatchDecision::NoReply);
    assert_eq!(rng.rolls_taken, 0);
}

/// Tests that empty tables never reply.
///
/// Expected: NoReply
#[test]
fn empty_tables_never_reply() {
    let assets = Assets::default();
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::default();

    let decision = matcher.decide(&message(ALICE_ID, "hello world", &[ALICE_ID]), BOT_ID, &mut rng);

    assert_eq!(decision, MatchDecision::NoReply);
}

/// Tests that a failed all-keyword roll falls through to any-keyword rules.
///
/// Expected: AnyKeywords reply
#[test]
fn failed_all_keyword_roll_falls_through() {
    let assets = assets(
        KeywordTableBuilder::new().topic("greeting", &["hello"], 10, &["from all"]),
        KeywordTableBuilder::new().topic("any", &["hello"], 100, &["from any"]),
        VipTableBuilder::new(),
    );
    let matcher = MessageMatcher::new(&assets, None);
    let mut rng = ScriptedRandom::new(&[90, 5], &[]);

    let decision = matcher.decide(&message(ALICE_ID, "hello", &[]), BOT_ID, &mut rng);

    assert_eq!(decision, reply(MatchCategory::AnyKeywords, "any", "from any"));
}
