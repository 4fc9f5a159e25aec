use thiserror::Error;

use crate::model::extension::Extension;

/// Failures of the runtime extension registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// No extension exists with the requested name.
    #[error("Extension '{0}' does not exist")]
    NotFound(String),

    /// Load requested for an extension that is already active.
    #[error("Extension '{0}' is already loaded")]
    AlreadyLoaded(Extension),

    /// Unload or reload requested for an extension that is not active.
    #[error("Extension '{0}' is not loaded")]
    NotLoaded(Extension),
}
