use serde_json::{json, Value};

/// Builder for the JSON of an `all.json` / `any.json` keyword table.
///
/// Topics are emitted in the order they were added.
///
/// # Example
///
/// ```rust,ignore
/// let json = KeywordTableBuilder::new()
///     .topic("greeting", &["hello"], 100, &["hi", "hey"])
///     .build();
/// ```
#[derive(Default)]
pub struct KeywordTableBuilder {
    topics: Vec<Value>,
}

impl KeywordTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a keyword rule.
    ///
    /// # Arguments
    /// - `topic` - Rule name
    /// - `keywords` - Substrings the rule looks for
    /// - `chance` - Percent chance the rule fires when matched
    /// - `replies` - Candidate reply texts
    pub fn topic(mut self, topic: &str, keywords: &[&str], chance: u8, replies: &[&str]) -> Self {
        self.topics.push(json!({
            "topic": topic,
            "keywords": keywords,
            "chance": chance,
            "replies": replies,
        }));
        self
    }

    pub fn build(self) -> Value {
        json!({ "topics": self.topics })
    }
}

/// Builder for one VIP profile entry.
///
/// Every chance defaults to 100 and every reply list to a single
/// `"{rule} reply"` text so tests only set what they check.
pub struct VipBuilder {
    name: String,
    id: u64,
    send_chance: u8,
    send_topics: Vec<Value>,
    mentions_chance: u8,
    mentions_replies: Vec<String>,
    be_mentioned_chance: u8,
    be_mentioned_replies: Vec<String>,
}

impl VipBuilder {
    pub fn new(name: &str, id: u64) -> Self {
        Self {
            name: name.to_string(),
            id,
            send_chance: 100,
            send_topics: vec![json!({ "topic": "default", "replies": ["send reply"] })],
            mentions_chance: 100,
            mentions_replies: vec!["mentions reply".to_string()],
            be_mentioned_chance: 100,
            be_mentioned_replies: vec!["be_mentioned reply".to_string()],
        }
    }

    /// Sets the on-send chance and drops the default topic; add topics with
    /// `send_topic`.
    pub fn send(mut self, chance: u8) -> Self {
        self.send_chance = chance;
        self.send_topics.clear();
        self
    }

    pub fn send_topic(mut self, topic: &str, replies: &[&str]) -> Self {
        self.send_topics
            .push(json!({ "topic": topic, "replies": replies }));
        self
    }

    pub fn mentions(mut self, chance: u8, replies: &[&str]) -> Self {
        self.mentions_chance = chance;
        self.mentions_replies = replies.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn be_mentioned(mut self, chance: u8, replies: &[&str]) -> Self {
        self.be_mentioned_chance = chance;
        self.be_mentioned_replies = replies.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "name": self.name,
            "id": self.id,
            "send": { "chance": self.send_chance, "topics": self.send_topics },
            "mentions": { "chance": self.mentions_chance, "replies": self.mentions_replies },
            "be_mentioned": {
                "chance": self.be_mentioned_chance,
                "replies": self.be_mentioned_replies
            },
        })
    }
}

/// Builder for the JSON of a `vip.json` table.
#[derive(Default)]
pub struct VipTableBuilder {
    vips: Vec<Value>,
}

impl VipTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vip(mut self, vip: VipBuilder) -> Self {
        self.vips.push(vip.build());
        self
    }

    pub fn build(self) -> Value {
        json!({ "vips": self.vips })
    }
}
