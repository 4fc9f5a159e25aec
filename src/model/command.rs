//! Parsed free-form command options.
//!
//! Slash command options arrive as strings; each is parsed into a closed enum
//! with an explicit `Unrecognized` variant so the command can answer with an
//! "invalid option" message instead of guessing.

use crate::model::extension::Extension;

/// Where `/sync` registers the command set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncScope {
    Guild,
    Global,
    Unrecognized(String),
}

impl SyncScope {
    pub fn parse(option: &str) -> Self {
        match option.trim() {
            "guild" | "g" | "." => Self::Guild,
            "global" | "gl" | ".." => Self::Global,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Listening,
    Watching,
    Competing,
    Custom,
    Unrecognized(String),
}

impl ActivityKind {
    /// Parses the optional `kind` option; absent means playing.
    pub fn parse(option: Option<&str>) -> Self {
        let Some(option) = option else {
            return Self::Playing;
        };

        match option.trim().to_lowercase().as_str() {
            "playing" | "play" => Self::Playing,
            "listening" | "listen" => Self::Listening,
            "watching" | "watch" => Self::Watching,
            "competing" | "compete" => Self::Competing,
            "custom" => Self::Custom,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Presence requested through `/set_activity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityChoice {
    /// Clear the activity and restore the online status.
    Default,
    Set { kind: ActivityKind, name: String },
}

impl ActivityChoice {
    pub fn parse(name: &str, kind: Option<&str>) -> Self {
        match name.trim() {
            "default" | "d" => Self::Default,
            name => Self::Set {
                kind: ActivityKind::parse(kind),
                name: name.to_string(),
            },
        }
    }
}

/// Target of `/load`, `/unload` and `/reload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionTarget {
    All,
    One(Extension),
    Unknown(String),
}

impl ExtensionTarget {
    pub fn parse(option: &str) -> Self {
        let option = option.trim().to_lowercase();
        if option == "all" {
            return Self::All;
        }
        match option.parse::<Extension>() {
            Ok(extension) => Self::One(extension),
            Err(_) => Self::Unknown(option),
        }
    }

    /// Extensions the command applies to, in registry order.
    pub fn extensions(&self) -> Vec<Extension> {
        match self {
            Self::All => Extension::ALL.to_vec(),
            Self::One(extension) => vec![*extension],
            Self::Unknown(_) => Vec::new(),
        }
    }
}
