use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{error::extension::ExtensionError, model::extension::Extension};

/// Tracks which feature groups are currently enabled.
///
/// Handlers check the registry before doing work, so unloading an extension
/// takes effect on the next event. Cloning shares the same set.
#[derive(Clone)]
pub struct ExtensionRegistry {
    loaded: Arc<RwLock<BTreeSet<Extension>>>,
}

impl ExtensionRegistry {
    pub fn new(initial: impl IntoIterator<Item = Extension>) -> Self {
        Self {
            loaded: Arc::new(RwLock::new(initial.into_iter().collect())),
        }
    }

    pub async fn is_loaded(&self, extension: Extension) -> bool {
        self.loaded.read().await.contains(&extension)
    }

    /// Loaded extensions in name order.
    pub async fn loaded(&self) -> Vec<Extension> {
        self.loaded.read().await.iter().copied().collect()
    }

    /// Enables an extension.
    ///
    /// # Returns
    /// - `Ok(())` - Extension was not loaded and now is
    /// - `Err(ExtensionError::AlreadyLoaded)` - Extension was already enabled
    pub async fn load(&self, extension: Extension) -> Result<(), ExtensionError> {
        if !self.loaded.write().await.insert(extension) {
            return Err(ExtensionError::AlreadyLoaded(extension));
        }
        tracing::info!("Loaded extension {}", extension);
        Ok(())
    }

    /// Disables an extension.
    ///
    /// # Returns
    /// - `Ok(())` - Extension was loaded and now is not
    /// - `Err(ExtensionError::NotLoaded)` - Extension was not enabled
    pub async fn unload(&self, extension: Extension) -> Result<(), ExtensionError> {
        if !self.loaded.write().await.remove(&extension) {
            return Err(ExtensionError::NotLoaded(extension));
        }
        tracing::info!("Unloaded extension {}", extension);
        Ok(())
    }

    /// Checks that an extension can be reloaded.
    ///
    /// The extension stays enabled; the caller re-reads the asset files.
    pub async fn reload(&self, extension: Extension) -> Result<(), ExtensionError> {
        if !self.is_loaded(extension).await {
            return Err(ExtensionError::NotLoaded(extension));
        }
        tracing::info!("Reloaded extension {}", extension);
        Ok(())
    }
}
