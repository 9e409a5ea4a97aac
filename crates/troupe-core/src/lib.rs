//! # Troupe Core
//!
//! Host-side implementation for the Troupe framework.
//!
//! ## Components
//!
//! - [`Kernel`] - The microkernel managing extension lifecycle
//! - [`HookBus`] - Dispatch of diagnostic hook events to subscribers
//! - Registries for providers and extensions

pub mod hooks;
pub mod kernel;
pub mod registry;

pub use hooks::HookBus;
pub use kernel::Kernel;
pub use registry::{ExtensionRegistry, ProviderRegistry};
