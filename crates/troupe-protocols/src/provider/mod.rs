//! LLM Provider protocol definitions.
//!
//! Providers connect conversations to language models and expose a
//! completion capability to the rest of the framework.

mod model;
mod request;
mod response;
mod traits;

pub use model::*;
pub use request::*;
pub use response::*;
pub use traits::*;
