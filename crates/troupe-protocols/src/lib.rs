//! # Troupe Protocols
//!
//! Core protocol definitions (traits) for the Troupe framework.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Base trait for all extensions
//! - [`LLMProvider`] - Trait for LLM provider implementations
//! - [`HookEmitter`] - Capability for emitting diagnostic events

pub mod error;
pub mod extension;
pub mod hooks;
pub mod provider;
pub mod types;

// Re-export core traits
pub use extension::{Extension, ExtensionContext, ExtensionManifest, Provides};
pub use hooks::{HookEmitter, HookHandler};
pub use provider::{CompletionRequest, CompletionResponse, LLMProvider};
pub use error::{ExtensionError, HookError, ProviderError};
pub use types::*;
