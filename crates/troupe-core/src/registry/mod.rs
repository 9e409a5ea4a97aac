//! Registries for extensions and providers.

mod extension;
mod provider;

pub use extension::ExtensionRegistry;
pub use provider::ProviderRegistry;
