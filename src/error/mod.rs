//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps the domain-specific errors
//! raised by configuration loading, report fetching, the extension registry and
//! the Discord API. Event handlers never propagate these errors to serenity; they
//! log them and return. Command handlers turn them into user-facing text.

pub mod config;
pub mod extension;
pub mod internal;
pub mod report;

use thiserror::Error;

use crate::error::{
    config::ConfigError, extension::ExtensionError, internal::InternalError, report::ReportError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants
/// use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup, environment loading or asset reload.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client error from reqwest outside of report fetching.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Market report could not be fetched or rendered.
    #[error(transparent)]
    ReportErr(#[from] ReportError),

    /// Extension could not be loaded, unloaded or reloaded.
    #[error(transparent)]
    ExtensionErr(#[from] ExtensionError),

    /// Unexpected internal condition, usually a bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
