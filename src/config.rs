use std::path::PathBuf;
use std::str::FromStr;

use crate::{error::config::ConfigError, model::extension::Extension};

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_ASSETS_DIR: &str = "languages";
const DEFAULT_REACTION_ROLES_FILE: &str = "config/reaction_roles.json";
const DEFAULT_REPORT_API_URL: &str = "http://localhost:5000";

/// Process configuration read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,

    pub guild_id: u64,
    pub welcome_channel_id: u64,
    pub log_channel_id: u64,
    /// Channel where auto-replies are never sent.
    pub conference_channel_id: Option<u64>,
    /// Message whose reactions grant roles.
    pub role_message_id: Option<u64>,

    pub admin_role_id: u64,
    pub tester_role_id: u64,
    pub report_role_id: u64,
    /// Falls back to the application owner when unset.
    pub owner_id: Option<u64>,

    pub language: String,
    pub assets_dir: PathBuf,
    pub reaction_roles_file: PathBuf,
    pub extensions: Vec<Extension>,

    pub report_api_url: String,
    pub report_schedule: Option<String>,
    pub report_channel_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_role_id = required_id(&lookup, "DISCORD_ADMIN_ROLE_ID")?;

        let extensions = match lookup("BOT_EXTENSIONS") {
            Some(raw) => parse_extensions(&raw)?,
            None => Extension::ALL.to_vec(),
        };

        let report_schedule = lookup("REPORT_SCHEDULE").filter(|s| !s.trim().is_empty());
        let report_channel_id = optional_id(&lookup, "REPORT_CHANNEL_ID")?;
        if report_schedule.is_some() && report_channel_id.is_none() {
            return Err(ConfigError::MissingEnvVar("REPORT_CHANNEL_ID".to_string()));
        }

        Ok(Self {
            discord_token: lookup("DISCORD_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            guild_id: required_id(&lookup, "DISCORD_GUILD_ID")?,
            welcome_channel_id: required_id(&lookup, "DISCORD_WELCOME_CHANNEL_ID")?,
            log_channel_id: required_id(&lookup, "DISCORD_LOG_CHANNEL_ID")?,
            conference_channel_id: optional_id(&lookup, "DISCORD_CONFERENCE_CHANNEL_ID")?,
            role_message_id: optional_id(&lookup, "DISCORD_ROLE_MESSAGE_ID")?,
            admin_role_id,
            tester_role_id: required_id(&lookup, "DISCORD_TESTER_ROLE_ID")?,
            report_role_id: optional_id(&lookup, "DISCORD_REPORT_ROLE_ID")?
                .unwrap_or(admin_role_id),
            owner_id: optional_id(&lookup, "DISCORD_OWNER_ID")?,
            language: lookup("DISCORD_GUILD_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            assets_dir: lookup("BOT_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
            reaction_roles_file: lookup("REACTION_ROLES_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REACTION_ROLES_FILE)),
            extensions,
            report_api_url: lookup("REPORT_API_URL")
                .unwrap_or_else(|| DEFAULT_REPORT_API_URL.to_string()),
            report_schedule,
            report_channel_id,
        })
    }
}

fn required_id<F>(lookup: &F, name: &str) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional_id(lookup, name)?.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_id<F>(lookup: &F, name: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        })
}

fn parse_extensions(raw: &str) -> Result<Vec<Extension>, ConfigError> {
    let mut extensions = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let extension = Extension::from_str(name).map_err(|e| ConfigError::InvalidEnvVar {
            name: "BOT_EXTENSIONS".to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })?;
        if !extensions.contains(&extension) {
            extensions.push(extension);
        }
    }
    Ok(extensions)
}
