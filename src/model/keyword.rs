//! Keyword reply tables (`all.json` and `any.json`).

use serde::Deserialize;

use crate::error::config::ConfigError;

/// Probability in percent that a matched rule actually fires.
///
/// Deserialization rejects values above 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub struct ChancePercent(u8);

impl ChancePercent {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ChancePercent {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(format!("chance must be between 0 and 100, got {}", value));
        }
        Ok(Self(value))
    }
}

/// How a rule's keywords are matched against message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Every keyword must appear in the content.
    All,
    /// At least one keyword must appear in the content.
    Any,
}

/// A keyword-triggered reply rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeywordRule {
    pub topic: String,
    pub keywords: Vec<String>,
    pub chance: ChancePercent,
    pub replies: Vec<String>,
}

impl KeywordRule {
    /// Case-sensitive substring match of the rule's keywords against `content`.
    pub fn matches(&self, content: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::All => self.keywords.iter().all(|k| content.contains(k.as_str())),
            MatchMode::Any => self.keywords.iter().any(|k| content.contains(k.as_str())),
        }
    }
}

/// Ordered list of keyword rules; evaluation follows file order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KeywordTable {
    #[serde(default)]
    pub topics: Vec<KeywordRule>,
}

impl KeywordTable {
    /// Checks that every rule can actually produce a reply.
    ///
    /// # Arguments
    /// - `table` - Table name used in the error message
    ///
    /// # Returns
    /// - `Ok(())` - Every rule has at least one non-empty keyword and one reply
    /// - `Err(ConfigError::InvalidTable)` - First offending rule
    pub fn validate(&self, table: &'static str) -> Result<(), ConfigError> {
        for rule in &self.topics {
            if rule.keywords.is_empty() || rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(ConfigError::InvalidTable {
                    table,
                    reason: format!("topic '{}' has an empty keyword list or keyword", rule.topic),
                });
            }
            if rule.replies.is_empty() {
                return Err(ConfigError::InvalidTable {
                    table,
                    reason: format!("topic '{}' has no replies", rule.topic),
                });
            }
        }
        Ok(())
    }
}
