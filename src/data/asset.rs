//! JSON asset loading.
//!
//! Reply tables, text tables and report templates live in flat JSON files under
//! `{assets_dir}/{language}/`. A missing or syntactically broken file is logged
//! and replaced by its default (an empty table or built-in text) so a single bad
//! file never keeps the bot offline. A file that parses but does not match the
//! expected structure, or breaks a table invariant, is a configuration error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::config::ConfigError,
    model::{
        keyword::KeywordTable,
        messages::{BotMessages, EventMessages},
        reaction_role::ReactionRoleTable,
        report::ReportKind,
        template::{ReportTemplate, ReportTemplates},
        vip::VipTable,
    },
};

/// Reads and deserializes a JSON file.
///
/// # Arguments
/// - `path` - File to read
///
/// # Returns
/// - `Ok(Some(T))` - File parsed successfully
/// - `Ok(None)` - File is missing, unreadable or not valid JSON (logged)
/// - `Err(ConfigError::InvalidAsset)` - Valid JSON with the wrong structure
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::error!("Error: {} not found, using defaults", path.display());
            return Ok(None);
        }
        Err(e) => {
            tracing::error!("Failed to read {}, using defaults: {}", path.display(), e);
            return Ok(None);
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => Ok(Some(value)),
        Err(e) if matches!(e.classify(), Category::Syntax | Category::Eof | Category::Io) => {
            tracing::error!(
                "Error: invalid JSON format in {}, using defaults: {}",
                path.display(),
                e
            );
            Ok(None)
        }
        Err(e) => Err(ConfigError::InvalidAsset {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Locations of every asset file for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub all_keywords: PathBuf,
    pub any_keywords: PathBuf,
    pub vip_keywords: PathBuf,
    pub bot_messages: PathBuf,
    pub event_messages: PathBuf,
    pub profit_template: PathBuf,
    pub trends_template: PathBuf,
    pub reaction_roles: PathBuf,
}

impl AssetPaths {
    pub fn new(assets_dir: &Path, language: &str, reaction_roles: &Path) -> Self {
        let keywords = assets_dir.join(language).join("keywords");
        let templates = assets_dir.join(language).join("templates");

        Self {
            all_keywords: keywords.join("all.json"),
            any_keywords: keywords.join("any.json"),
            vip_keywords: keywords.join("vip.json"),
            bot_messages: templates.join("bot.json"),
            event_messages: templates.join("event.json"),
            profit_template: templates.join("profit_report.json"),
            trends_template: templates.join("trends_report.json"),
            reaction_roles: reaction_roles.to_path_buf(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.assets_dir,
            &config.language,
            &config.reaction_roles_file,
        )
    }
}

/// Every configuration table the bot uses, validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assets {
    pub all_keywords: KeywordTable,
    pub any_keywords: KeywordTable,
    pub vips: VipTable,
    pub bot_messages: BotMessages,
    pub event_messages: EventMessages,
    pub report_templates: ReportTemplates,
    pub reaction_roles: ReactionRoleTable,
}

impl Assets {
    /// Loads and validates all asset files.
    ///
    /// # Returns
    /// - `Ok(Assets)` - Every table loaded (missing files replaced by defaults)
    /// - `Err(ConfigError)` - A file has the wrong structure or breaks an invariant
    pub fn load(paths: &AssetPaths) -> Result<Self, ConfigError> {
        let assets = Self {
            all_keywords: load_json(&paths.all_keywords)?.unwrap_or_default(),
            any_keywords: load_json(&paths.any_keywords)?.unwrap_or_default(),
            vips: load_json(&paths.vip_keywords)?.unwrap_or_default(),
            bot_messages: load_json(&paths.bot_messages)?.unwrap_or_default(),
            event_messages: load_json(&paths.event_messages)?.unwrap_or_default(),
            report_templates: ReportTemplates {
                profit: load_json(&paths.profit_template)?
                    .unwrap_or_else(|| ReportTemplate::default_for(ReportKind::Profit)),
                trends: load_json(&paths.trends_template)?
                    .unwrap_or_else(|| ReportTemplate::default_for(ReportKind::Trends)),
            },
            reaction_roles: load_json(&paths.reaction_roles)?.unwrap_or_default(),
        };

        assets.all_keywords.validate("all")?;
        assets.any_keywords.validate("any")?;
        assets.vips.validate()?;

        tracing::info!(
            "Loaded assets: {} all-keyword topics, {} any-keyword topics, {} VIPs, {} reaction roles",
            assets.all_keywords.topics.len(),
            assets.any_keywords.topics.len(),
            assets.vips.vips.len(),
            assets.reaction_roles.roles.len()
        );

        Ok(assets)
    }
}

/// Shared, reloadable handle to the current assets.
///
/// Readers get an `Arc` snapshot and never hold the lock while working with it.
#[derive(Clone)]
pub struct AssetStore {
    paths: AssetPaths,
    current: Arc<RwLock<Arc<Assets>>>,
}

impl AssetStore {
    pub fn new(paths: AssetPaths, assets: Assets) -> Self {
        Self {
            paths,
            current: Arc::new(RwLock::new(Arc::new(assets))),
        }
    }

    /// Loads the assets from disk and wraps them in a store.
    pub fn open(paths: AssetPaths) -> Result<Self, ConfigError> {
        let assets = Assets::load(&paths)?;
        Ok(Self::new(paths, assets))
    }

    pub async fn current(&self) -> Arc<Assets> {
        self.current.read().await.clone()
    }

    /// Re-reads every asset file.
    ///
    /// The previous assets stay active when the new files are rejected.
    pub async fn reload(&self) -> Result<(), ConfigError> {
        let assets = Assets::load(&self.paths)?;
        *self.current.write().await = Arc::new(assets);
        Ok(())
    }
}
