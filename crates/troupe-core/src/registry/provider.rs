//! Provider registry.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use troupe_protocols::error::{ExtensionError, ProviderError};
use troupe_protocols::extension::ProviderRegistryAccess;
use troupe_protocols::provider::LLMProvider;

/// Registry of LLM providers, keyed by provider ID.
///
/// Extensions register providers during initialization; the host looks them
/// up by ID when routing completion requests.
pub struct ProviderRegistry {
    providers: DashMap<String, Arc<dyn LLMProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: DashMap::new(),
        }
    }

    /// Register a provider under its own ID. A second registration under the
    /// same ID is rejected rather than replacing the first.
    pub fn register(&self, provider: Arc<dyn LLMProvider>) -> Result<(), ExtensionError> {
        match self.providers.entry(provider.id().to_string()) {
            Entry::Occupied(entry) => Err(ExtensionError::AlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(provider);
                Ok(())
            }
        }
    }

    /// Remove a provider, freeing its ID for re-registration.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.providers
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))
    }

    /// Look up a provider, if registered.
    pub fn get(&self, id: &str) -> Option<Arc<dyn LLMProvider>> {
        self.providers.get(id).map(|entry| entry.value().clone())
    }

    /// Look up a provider that must be present.
    pub fn require(&self, id: &str) -> Result<Arc<dyn LLMProvider>, ProviderError> {
        self.get(id)
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))
    }

    /// IDs of all registered providers.
    pub fn list_ids(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderRegistryAccess for ProviderRegistry {
    fn register_provider(&self, provider: Arc<dyn LLMProvider>) -> Result<(), ExtensionError> {
        self.register(provider)
    }

    fn unregister_provider(&self, provider_id: &str) -> Result<(), ExtensionError> {
        self.unregister(provider_id)
    }
}
