//! LLM Provider errors.

use thiserror::Error;

use super::HookError;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Hook(#[from] HookError),
}
