//! Mock provider extension definition.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use troupe_protocols::error::ExtensionError;
use troupe_protocols::extension::{Extension, ExtensionContext, ExtensionManifest, Provides};
use troupe_protocols::types::Version;

use crate::provider::{MockProvider, PROVIDER_ID, default_responses};

/// Configuration for the mock provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Canned replies, served round-robin.
    pub responses: Vec<String>,

    /// Enables diagnostic event emission.
    pub debug: bool,

    /// Enables per-call raw event payloads; only effective when `debug` is
    /// also set.
    pub raw_debug: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            responses: default_responses(),
            debug: false,
            raw_debug: false,
        }
    }
}

/// Extension providing the mock test provider.
pub struct MockExtension {
    manifest: ExtensionManifest,
}

impl MockExtension {
    pub fn new() -> Self {
        let mut manifest =
            ExtensionManifest::new("provider-mock", "Mock Provider", Version::new(0, 1, 0));
        manifest.description =
            "Pre-configured responses for testing without API calls".to_string();
        manifest.provides = Provides {
            providers: vec![PROVIDER_ID.to_string()],
        };

        Self { manifest }
    }
}

impl Default for MockExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for MockExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        let config = if ctx.config.is_null() {
            MockConfig::default()
        } else {
            serde_json::from_value(ctx.config.clone())
                .map_err(|e| ExtensionError::InitializationFailed(e.to_string()))?
        };

        let provider = MockProvider::new(
            config.responses,
            ctx.hooks.clone(),
            config.debug,
            config.raw_debug,
        );
        ctx.provider_registry.register_provider(Arc::new(provider))?;

        info!("Mounted mock provider");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
