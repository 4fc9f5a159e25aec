use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the variable
        name: String,
        /// The raw value that failed to parse
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// An asset file is valid JSON but does not match the expected structure,
    /// for example a required key is missing or a value has the wrong type.
    #[error("Invalid asset file {path}: {source}")]
    InvalidAsset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A reply or template table breaks one of its invariants.
    #[error("Invalid {table} table: {reason}")]
    InvalidTable {
        /// Which table was rejected (e.g. "vip")
        table: &'static str,
        /// Description of the violated invariant
        reason: String,
    },
}
