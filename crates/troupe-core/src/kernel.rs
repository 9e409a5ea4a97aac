//! Microkernel for managing extension lifecycle.

use std::sync::Arc;

use tracing::info;

use troupe_protocols::error::{ExtensionError, ProviderError};
use troupe_protocols::extension::{Extension, ExtensionContext, ExtensionManifest};
use troupe_protocols::hooks::HookEmitter;
use troupe_protocols::provider::LLMProvider;

use crate::hooks::HookBus;
use crate::registry::{ExtensionRegistry, ProviderRegistry};

/// The microkernel managing extension lifecycle.
pub struct Kernel {
    extension_registry: Arc<ExtensionRegistry>,
    provider_registry: Arc<ProviderRegistry>,
    hooks: Arc<HookBus>,
}

impl Kernel {
    /// Create a new kernel.
    pub fn new() -> Self {
        Self {
            extension_registry: Arc::new(ExtensionRegistry::new()),
            provider_registry: Arc::new(ProviderRegistry::new()),
            hooks: Arc::new(HookBus::new()),
        }
    }

    /// Load and initialize an extension.
    pub async fn load_extension(
        &self,
        mut extension: Box<dyn Extension>,
        config: serde_json::Value,
    ) -> Result<(), ExtensionError> {
        let manifest = extension.manifest();
        let id = manifest.id.clone();

        info!("Loading extension: {} v{}", manifest.name, manifest.version);

        let ctx = ExtensionContext::new(
            config,
            self.provider_registry.clone(),
            Some(self.hooks.clone() as Arc<dyn HookEmitter>),
        );

        extension.initialize(ctx).await?;
        self.extension_registry.register(Arc::from(extension))?;

        info!("Extension loaded: {}", id);
        Ok(())
    }

    /// Unload an extension.
    pub async fn unload_extension(&self, id: &str) -> Result<(), ExtensionError> {
        info!("Unloading extension: {}", id);
        self.extension_registry.unregister(id)?;
        Ok(())
    }

    /// Get the provider registry.
    pub fn provider_registry(&self) -> &Arc<ProviderRegistry> {
        &self.provider_registry
    }

    /// Look up a registered provider by ID.
    pub fn provider(&self, id: &str) -> Result<Arc<dyn LLMProvider>, ProviderError> {
        self.provider_registry.require(id)
    }

    /// Get the hook bus.
    pub fn hooks(&self) -> &Arc<HookBus> {
        &self.hooks
    }

    /// List all loaded extensions.
    pub fn list_extensions(&self) -> Vec<ExtensionManifest> {
        self.extension_registry.list()
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;
