//! Diagnostic hook interfaces.
//!
//! Hooks carry structured trace events from modules to the host. A module
//! holding no emitter skips emission entirely; handler failures surface to
//! the caller unmodified.

use async_trait::async_trait;

use crate::error::HookError;

/// Raw request snapshot, emitted before a provider call.
pub const LLM_REQUEST_RAW: &str = "llm:request:raw";

/// Raw response snapshot, emitted after a provider call.
pub const LLM_RESPONSE_RAW: &str = "llm:response:raw";

/// Capability for emitting diagnostic events to the host.
#[async_trait]
pub trait HookEmitter: Send + Sync {
    /// Emit a named event with a structured payload.
    async fn emit(&self, event: &str, payload: serde_json::Value) -> Result<(), HookError>;
}

/// Handler invoked for each emitted event.
#[async_trait]
pub trait HookHandler: Send + Sync {
    /// Handle one event.
    async fn handle(&self, event: &str, payload: &serde_json::Value) -> Result<(), HookError>;
}
