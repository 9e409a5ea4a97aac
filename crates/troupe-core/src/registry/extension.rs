//! Extension registry.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use troupe_protocols::error::ExtensionError;
use troupe_protocols::extension::{Extension, ExtensionManifest};

/// Registry of loaded extensions, keyed by manifest ID.
///
/// Holding loaded extensions here keeps them alive for the lifetime of the
/// host; the capabilities they registered live in their own registries.
pub struct ExtensionRegistry {
    extensions: DashMap<String, Arc<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            extensions: DashMap::new(),
        }
    }

    /// Track a loaded extension. Loading two extensions with the same
    /// manifest ID is rejected.
    pub fn register(&self, extension: Arc<dyn Extension>) -> Result<(), ExtensionError> {
        match self.extensions.entry(extension.manifest().id.clone()) {
            Entry::Occupied(entry) => Err(ExtensionError::AlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(extension);
                Ok(())
            }
        }
    }

    /// Drop a loaded extension.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.extensions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))
    }

    /// Manifests of all loaded extensions.
    pub fn list(&self) -> Vec<ExtensionManifest> {
        self.extensions
            .iter()
            .map(|entry| entry.manifest().clone())
            .collect()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
