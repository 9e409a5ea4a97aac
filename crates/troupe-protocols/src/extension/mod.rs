//! Extension protocol definitions.
//!
//! Extensions are the pluggable building blocks of Troupe. Each one
//! declares what it provides and registers its capabilities with the host
//! during initialization.

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
