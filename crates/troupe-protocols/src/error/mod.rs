//! Error types for the Troupe protocol layer.

mod extension;
mod hook;
mod provider;

pub use extension::*;
pub use hook::*;
pub use provider::*;
