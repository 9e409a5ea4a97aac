//! Mock LLM provider for Troupe.
//!
//! Returns pre-configured responses without calling any real API. Useful
//! for exercising tool-handling and conversation logic in tests.

mod extension;
mod provider;

pub use extension::{MockConfig, MockExtension};
pub use provider::MockProvider;
