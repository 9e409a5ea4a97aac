//! Diagnostic hook errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("Hook handler failed for '{event}': {message}")]
    Handler { event: String, message: String },
}
