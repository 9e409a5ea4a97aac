//! Extension context for initialization.

use std::sync::Arc;

use super::ProviderRegistryAccess;
use crate::hooks::HookEmitter;

/// Context passed to extensions during initialization.
#[derive(Clone)]
pub struct ExtensionContext {
    /// Configuration for this extension.
    pub config: serde_json::Value,

    /// Registry for registering providers.
    pub provider_registry: Arc<dyn ProviderRegistryAccess>,

    /// Hook emitter for diagnostic events, when the host exposes one.
    pub hooks: Option<Arc<dyn HookEmitter>>,
}

impl ExtensionContext {
    /// Create a new extension context.
    pub fn new(
        config: serde_json::Value,
        provider_registry: Arc<dyn ProviderRegistryAccess>,
        hooks: Option<Arc<dyn HookEmitter>>,
    ) -> Self {
        Self {
            config,
            provider_registry,
            hooks,
        }
    }

    /// Get a configuration value.
    pub fn get_config<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.config
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
